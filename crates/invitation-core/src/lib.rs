//! Invitation Card Core Library
//!
//! Everything behind the invitation card that does not need a window:
//! the RSVP form model, the card state machine, the acknowledgment timer
//! and the webhook client that forwards confirmations to a spreadsheet.
//!
//! ## Quick Start
//!
//! ```ignore
//! use invitation_core::{InvitationFlow, SubmissionConfig, Submitter, WebhookClient};
//!
//! let client = WebhookClient::new(SubmissionConfig::new(DEFAULT_ENDPOINT)?)?;
//! let mut flow = InvitationFlow::new(Duration::from_secs(4));
//!
//! flow.open_form()?;
//! let id = flow.form().guests()[0].id.clone();
//! flow.update_guest_name(&id, "Ana")?;
//! flow.set_phone("11999999999");
//!
//! let payload = flow.begin_submission()?;
//! let outcome = client.submit(&payload).await;
//! flow.complete_submission(&outcome, Instant::now())?;
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod state;
pub mod submit;
pub mod types;

// Re-exports
pub use config::{
    CardConfig, ResponseMode, SubmissionConfig, DEFAULT_ACKNOWLEDGMENT_SECS, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::{InvitationError, InvitationResult, ValidationFailure};
pub use flow::InvitationFlow;
pub use form::RsvpForm;
pub use state::{CardEvent, CardState};
pub use submit::{SharedSubmitter, Submitter, WebhookClient};
pub use types::*;
