//! Error types for the invitation card

use thiserror::Error;

use crate::types::GuestId;

/// Reasons an RSVP is refused before anything leaves the machine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Phone number is empty or whitespace
    #[error("phone number is required")]
    MissingPhone,

    /// Every guest name is empty or whitespace
    #[error("at least one guest name is required")]
    NoGuestNames,
}

/// Main error type for invitation card operations
#[derive(Error, Debug)]
pub enum InvitationError {
    /// The form contents cannot be submitted
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// The webhook call raised before completing
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The webhook answered with a non-success status (only when inspecting responses)
    #[error("Endpoint rejected submission with status {0}")]
    Rejected(u16),

    /// No guest entry carries this id
    #[error("Unknown guest: {0}")]
    UnknownGuest(GuestId),

    /// The event does not apply to the current card state
    #[error("Cannot handle {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    /// A failure alert has not been dismissed yet
    #[error("Waiting for the previous alert to be dismissed")]
    AlertPending,

    /// Presence was already confirmed for this card
    #[error("Presence already confirmed")]
    AlreadyConfirmed,

    /// Bad endpoint, event file or other startup setting
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InvitationError {
    /// Whether this error came from talking to the webhook.
    ///
    /// Both a raised transport error and an inspected rejection are shown
    /// to the guest the same way.
    pub fn is_transport(&self) -> bool {
        matches!(self, InvitationError::Transport(_) | InvitationError::Rejected(_))
    }
}

/// Result type alias using InvitationError
pub type InvitationResult<T> = Result<T, InvitationError>;
