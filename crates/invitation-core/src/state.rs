//! Card state machine
//!
//! The card is always in exactly one of these states; overlays are derived
//! from it. Confirmation is tracked separately by [`crate::InvitationFlow`]
//! because it outlives the acknowledgment.

use tokio::time::Instant;

use crate::error::{InvitationError, InvitationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Card shown, no overlay
    #[default]
    Idle,
    /// Full-screen image viewer open
    ImageExpanded,
    /// RSVP form open and editable
    FormOpen,
    /// RSVP form open, webhook call in flight
    Submitting,
    /// Acknowledgment overlay shown until `until`
    Thanking { until: Instant },
}

/// Inputs that drive the card between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    ImageClicked,
    BackdropClicked,
    ConfirmClicked,
    SubmitRequested,
    SubmitSucceeded { until: Instant },
    SubmitFailed,
    AcknowledgmentElapsed,
}

impl CardState {
    pub fn name(&self) -> &'static str {
        match self {
            CardState::Idle => "idle",
            CardState::ImageExpanded => "image expanded",
            CardState::FormOpen => "form open",
            CardState::Submitting => "submitting",
            CardState::Thanking { .. } => "thanking",
        }
    }

    /// Compute the state that follows `event`.
    ///
    /// Every pairing not listed is rejected with `InvalidTransition`.
    pub fn transition(self, event: CardEvent) -> InvitationResult<CardState> {
        let next = match (self, event) {
            (CardState::Idle, CardEvent::ImageClicked) => CardState::ImageExpanded,
            (CardState::ImageExpanded, CardEvent::BackdropClicked) => CardState::Idle,
            (CardState::Idle, CardEvent::ConfirmClicked) => CardState::FormOpen,
            (CardState::FormOpen, CardEvent::SubmitRequested) => CardState::Submitting,
            (CardState::Submitting, CardEvent::SubmitSucceeded { until }) => {
                CardState::Thanking { until }
            }
            (CardState::Submitting, CardEvent::SubmitFailed) => CardState::FormOpen,
            (CardState::Thanking { .. }, CardEvent::AcknowledgmentElapsed) => CardState::Idle,
            (state, event) => {
                return Err(InvitationError::InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                })
            }
        };
        tracing::debug!("card {} -> {} on {}", self.name(), next.name(), event.name());
        Ok(next)
    }

    pub fn is_image_expanded(&self) -> bool {
        matches!(self, CardState::ImageExpanded)
    }

    /// Form overlay is shown while editing and while submitting
    pub fn is_form_visible(&self) -> bool {
        matches!(self, CardState::FormOpen | CardState::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, CardState::Submitting)
    }

    pub fn is_thanking(&self) -> bool {
        matches!(self, CardState::Thanking { .. })
    }
}

impl CardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CardEvent::ImageClicked => "image click",
            CardEvent::BackdropClicked => "backdrop click",
            CardEvent::ConfirmClicked => "confirm click",
            CardEvent::SubmitRequested => "submit requested",
            CardEvent::SubmitSucceeded { .. } => "submit succeeded",
            CardEvent::SubmitFailed => "submit failed",
            CardEvent::AcknowledgmentElapsed => "acknowledgment elapsed",
        }
    }
}
