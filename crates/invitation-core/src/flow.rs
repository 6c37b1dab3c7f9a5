//! Invitation flow
//!
//! Ties the card state machine to the RSVP form and the confirmation fact.
//! The UI owns one `InvitationFlow` per card and calls into it from event
//! handlers; the webhook call itself happens between
//! [`InvitationFlow::begin_submission`] and
//! [`InvitationFlow::complete_submission`] so no borrow is held across it.
//!
//! A failed attempt leaves an alert pending. Until the UI calls
//! [`InvitationFlow::acknowledge_alert`] the form refuses new submissions.

use std::time::Duration;

use tokio::time::Instant;

use crate::error::{InvitationError, InvitationResult};
use crate::form::RsvpForm;
use crate::state::{CardEvent, CardState};
use crate::types::{GuestId, SubmissionPayload};

#[derive(Debug, Clone)]
pub struct InvitationFlow {
    state: CardState,
    confirmed: bool,
    alert_pending: bool,
    form: RsvpForm,
    acknowledgment: Duration,
}

impl InvitationFlow {
    /// Create a flow whose acknowledgment stays up for `acknowledgment`
    pub fn new(acknowledgment: Duration) -> Self {
        Self {
            state: CardState::Idle,
            confirmed: false,
            alert_pending: false,
            form: RsvpForm::new(),
            acknowledgment,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Once true, never false again for this card
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    /// A failure alert is up and the form is inert
    pub fn is_alert_pending(&self) -> bool {
        self.alert_pending
    }

    /// The guest dismissed the failure alert
    pub fn acknowledge_alert(&mut self) {
        self.alert_pending = false;
    }

    fn apply(&mut self, event: CardEvent) -> InvitationResult<()> {
        self.state = self.state.transition(event)?;
        Ok(())
    }

    pub fn open_image(&mut self) -> InvitationResult<()> {
        self.apply(CardEvent::ImageClicked)
    }

    pub fn close_image(&mut self) -> InvitationResult<()> {
        self.apply(CardEvent::BackdropClicked)
    }

    /// Open the RSVP form. Refused once presence is confirmed.
    pub fn open_form(&mut self) -> InvitationResult<()> {
        if self.confirmed {
            return Err(InvitationError::AlreadyConfirmed);
        }
        self.apply(CardEvent::ConfirmClicked)
    }

    pub fn add_guest_field(&mut self) -> GuestId {
        self.form.add_guest_field()
    }

    pub fn update_guest_name(&mut self, id: &GuestId, name: impl Into<String>) -> InvitationResult<()> {
        self.form.update_guest_name(id, name)
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.form.set_phone(phone);
    }

    /// Validate the form and move to `Submitting`.
    ///
    /// On validation failure the card stays in `FormOpen` with an alert
    /// pending, and the caller must not touch the network. While already
    /// submitting this fails with `InvalidTransition`, and while an alert is
    /// pending with `AlertPending`, so no second request or alert starts.
    pub fn begin_submission(&mut self) -> InvitationResult<SubmissionPayload> {
        if self.state != CardState::FormOpen {
            return Err(InvitationError::InvalidTransition {
                state: self.state.name(),
                event: CardEvent::SubmitRequested.name(),
            });
        }
        if self.alert_pending {
            return Err(InvitationError::AlertPending);
        }
        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(reason) => {
                self.alert_pending = true;
                return Err(reason.into());
            }
        };
        self.apply(CardEvent::SubmitRequested)?;
        Ok(payload)
    }

    /// Record how the webhook call ended.
    ///
    /// Success confirms presence, closes the form and starts the
    /// acknowledgment, which ends at `now + acknowledgment`. Failure
    /// reopens the form with its contents intact and an alert pending; the
    /// guest can retry once the alert is acknowledged.
    pub fn complete_submission(&mut self, outcome: &InvitationResult<()>, now: Instant) -> InvitationResult<()> {
        match outcome {
            Ok(()) => {
                self.apply(CardEvent::SubmitSucceeded {
                    until: now + self.acknowledgment,
                })?;
                self.confirmed = true;
            }
            Err(_) => {
                self.apply(CardEvent::SubmitFailed)?;
                self.alert_pending = true;
            }
        }
        Ok(())
    }

    /// Hide the acknowledgment if its time is up. Returns whether it was hidden.
    pub fn expire_acknowledgment(&mut self, now: Instant) -> bool {
        match self.state {
            CardState::Thanking { until } if now >= until => {
                self.apply(CardEvent::AcknowledgmentElapsed).is_ok()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_flow() -> InvitationFlow {
        let mut flow = InvitationFlow::new(Duration::from_secs(4));
        flow.open_form().unwrap();
        let id = flow.form().guests()[0].id.clone();
        flow.update_guest_name(&id, "Ana").unwrap();
        flow.set_phone("11999999999");
        flow
    }

    #[test]
    fn test_new_flow_is_idle() {
        let flow = InvitationFlow::new(Duration::from_secs(4));
        assert_eq!(flow.state(), CardState::Idle);
        assert!(!flow.is_confirmed());
        assert!(!flow.is_alert_pending());
    }

    #[test]
    fn test_begin_requires_open_form() {
        let mut flow = InvitationFlow::new(Duration::from_secs(4));
        assert!(matches!(
            flow.begin_submission(),
            Err(InvitationError::InvalidTransition { state: "idle", .. })
        ));
    }

    #[test]
    fn test_validation_failure_changes_nothing() {
        let mut flow = InvitationFlow::new(Duration::from_secs(4));
        flow.open_form().unwrap();

        let result = flow.begin_submission();
        assert!(matches!(result, Err(InvitationError::Validation(_))));
        assert_eq!(flow.state(), CardState::FormOpen);
        assert!(!flow.is_confirmed());
        assert!(flow.is_alert_pending());
    }

    #[test]
    fn test_pending_alert_blocks_repeat_clicks() {
        let mut flow = InvitationFlow::new(Duration::from_secs(4));
        flow.open_form().unwrap();
        assert!(matches!(flow.begin_submission(), Err(InvitationError::Validation(_))));

        // Clicking again before dismissing the alert raises nothing new
        assert!(matches!(flow.begin_submission(), Err(InvitationError::AlertPending)));

        flow.acknowledge_alert();
        assert!(matches!(flow.begin_submission(), Err(InvitationError::Validation(_))));
    }

    #[test]
    fn test_success_confirms_and_thanks() {
        let mut flow = filled_flow();
        flow.begin_submission().unwrap();
        assert!(flow.state().is_submitting());

        let now = Instant::now();
        flow.complete_submission(&Ok(()), now).unwrap();

        assert!(flow.is_confirmed());
        assert_eq!(
            flow.state(),
            CardState::Thanking {
                until: now + Duration::from_secs(4)
            }
        );
    }

    #[test]
    fn test_failure_keeps_form_for_retry() {
        let mut flow = filled_flow();
        flow.begin_submission().unwrap();

        let failed: InvitationResult<()> = Err(InvitationError::Rejected(502));
        flow.complete_submission(&failed, Instant::now()).unwrap();

        assert_eq!(flow.state(), CardState::FormOpen);
        assert!(!flow.is_confirmed());
        assert_eq!(flow.form().guests()[0].name, "Ana");
        assert!(flow.is_alert_pending());
        assert!(matches!(flow.begin_submission(), Err(InvitationError::AlertPending)));

        flow.acknowledge_alert();
        assert!(flow.begin_submission().is_ok());
    }

    #[test]
    fn test_acknowledgment_expiry() {
        let mut flow = filled_flow();
        flow.begin_submission().unwrap();
        let now = Instant::now();
        flow.complete_submission(&Ok(()), now).unwrap();

        assert!(!flow.expire_acknowledgment(now + Duration::from_secs(3)));
        assert!(flow.state().is_thanking());

        assert!(flow.expire_acknowledgment(now + Duration::from_secs(4)));
        assert_eq!(flow.state(), CardState::Idle);
        assert!(flow.is_confirmed());
    }

    #[test]
    fn test_confirmed_card_refuses_form() {
        let mut flow = filled_flow();
        flow.begin_submission().unwrap();
        let now = Instant::now();
        flow.complete_submission(&Ok(()), now).unwrap();
        flow.expire_acknowledgment(now + Duration::from_secs(4));

        assert!(matches!(flow.open_form(), Err(InvitationError::AlreadyConfirmed)));
        assert_eq!(flow.state(), CardState::Idle);
    }
}
