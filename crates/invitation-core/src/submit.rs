//! Submission client
//!
//! Sends the RSVP payload to the spreadsheet webhook. The call is a single
//! JSON POST with no retry and no idempotency key; a resend after failure
//! is a new record on the other side.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{ResponseMode, SubmissionConfig};
use crate::error::{InvitationError, InvitationResult};
use crate::types::SubmissionPayload;

/// Anything that can deliver an RSVP
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> InvitationResult<()>;
}

/// Shared handle to a submitter for UI context
pub type SharedSubmitter = Arc<dyn Submitter>;

/// HTTP client for the spreadsheet webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    config: SubmissionConfig,
}

impl WebhookClient {
    /// Create a new webhook client from configuration
    pub fn new(config: SubmissionConfig) -> InvitationResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Submitter for WebhookClient {
    async fn submit(&self, payload: &SubmissionPayload) -> InvitationResult<()> {
        tracing::debug!(
            "Posting RSVP for {} guest(s) to {}",
            payload.guests().len(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        // The body is never read.
        let status = response.status();
        tracing::debug!("Webhook answered {}", status);

        match self.config.response_mode {
            ResponseMode::Inspect if !status.is_success() => {
                Err(InvitationError::Rejected(status.as_u16()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let config = SubmissionConfig::new("http://localhost:9/rsvp").unwrap();
        let client = WebhookClient::new(config).unwrap();
        assert_eq!(client.config.endpoint.path(), "/rsvp");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) is not listening on test machines.
        let config = SubmissionConfig::new("http://127.0.0.1:9/rsvp").unwrap();
        let client = WebhookClient::new(config).unwrap();
        let guests = vec![crate::GuestEntry::named("Ana")];
        let payload = SubmissionPayload::new(&guests, "11999999999").unwrap();

        let err = client.submit(&payload).await.unwrap_err();
        assert!(matches!(err, InvitationError::Transport(_)));
        assert!(err.is_transport());
    }
}
