//! Card configuration
//!
//! Everything the desktop binary can tune from the command line.

use std::time::Duration;

use reqwest::Url;

use crate::error::{InvitationError, InvitationResult};
use crate::types::EventDetails;

/// Google Apps Script webhook that appends RSVPs to the spreadsheet
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzVnOFEsU-2SIWL1ZjZ8AU_K0_or3u1D7p1uutGATFO3_Xly0q67bTgl3VQJxWmrQ2D/exec";

/// How long the thank-you overlay stays up (seconds)
pub const DEFAULT_ACKNOWLEDGMENT_SECS: u64 = 4;

/// HTTP request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// What the webhook client does with the HTTP response
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ResponseMode {
    /// Any completed request counts as success; status is only logged
    #[default]
    Opaque,
    /// Non-2xx statuses are reported as failures
    Inspect,
}

/// Settings for the webhook client
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub response_mode: ResponseMode,
}

impl SubmissionConfig {
    /// Create a config for `endpoint`, which must be an http(s) URL
    pub fn new(endpoint: &str) -> InvitationResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| InvitationError::Config(format!("invalid endpoint {endpoint:?}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(InvitationError::Config(format!(
                "endpoint must use http or https, got {}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            response_mode: ResponseMode::Opaque,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }
}

/// Full configuration for one invitation card
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub event: EventDetails,
    pub submission: SubmissionConfig,
    pub acknowledgment: Duration,
}

impl CardConfig {
    pub fn new(event: EventDetails, submission: SubmissionConfig) -> Self {
        Self {
            event,
            submission,
            acknowledgment: Duration::from_secs(DEFAULT_ACKNOWLEDGMENT_SECS),
        }
    }

    pub fn with_acknowledgment(mut self, acknowledgment: Duration) -> Self {
        self.acknowledgment = acknowledgment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let config = SubmissionConfig::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("script.google.com"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.response_mode, ResponseMode::Opaque);
    }

    #[test]
    fn test_rejects_garbage_endpoint() {
        assert!(matches!(
            SubmissionConfig::new("not a url"),
            Err(InvitationError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            SubmissionConfig::new("ftp://example.com/rsvp"),
            Err(InvitationError::Config(_))
        ));
    }

    #[test]
    fn test_card_config_builders() {
        let submission = SubmissionConfig::new("http://localhost:8080/rsvp")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_response_mode(ResponseMode::Inspect);
        let config = CardConfig::new(EventDetails::default(), submission)
            .with_acknowledgment(Duration::from_millis(1500));

        assert_eq!(config.acknowledgment, Duration::from_millis(1500));
        assert_eq!(config.submission.timeout, Duration::from_secs(5));
        assert_eq!(config.submission.response_mode, ResponseMode::Inspect);
    }
}
