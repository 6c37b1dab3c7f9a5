//! RSVP form model
//!
//! Holds the guest rows and the phone number while the form overlay is
//! being edited. The list starts with one blank row, only ever grows, and
//! every row keeps its [`GuestId`] for its whole life.

use crate::error::{InvitationError, InvitationResult, ValidationFailure};
use crate::types::{GuestEntry, GuestId, SubmissionPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpForm {
    guests: Vec<GuestEntry>,
    phone: String,
}

impl RsvpForm {
    /// Create a form with a single blank guest row
    pub fn new() -> Self {
        Self {
            guests: vec![GuestEntry::blank()],
            phone: String::new(),
        }
    }

    /// Guest rows in entry order
    pub fn guests(&self) -> &[GuestEntry] {
        &self.guests
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Append a blank guest row and return its id.
    ///
    /// There is no upper bound on the number of rows.
    pub fn add_guest_field(&mut self) -> GuestId {
        let entry = GuestEntry::blank();
        let id = entry.id.clone();
        self.guests.push(entry);
        id
    }

    /// Replace the name of one guest row
    pub fn update_guest_name(&mut self, id: &GuestId, name: impl Into<String>) -> InvitationResult<()> {
        let entry = self
            .guests
            .iter_mut()
            .find(|guest| &guest.id == id)
            .ok_or_else(|| InvitationError::UnknownGuest(id.clone()))?;
        entry.name = name.into();
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Whether `id` is the last row (the one showing the "+" control)
    pub fn is_last(&self, id: &GuestId) -> bool {
        self.guests.last().is_some_and(|guest| &guest.id == id)
    }

    /// Check the form and build the payload that would be sent
    pub fn payload(&self) -> Result<SubmissionPayload, ValidationFailure> {
        SubmissionPayload::new(&self.guests, &self.phone)
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_one_blank_guest() {
        let form = RsvpForm::new();
        assert_eq!(form.guests().len(), 1);
        assert!(form.guests()[0].is_blank());
        assert!(form.phone().is_empty());
    }

    #[test]
    fn test_add_guest_field_appends_blank() {
        let mut form = RsvpForm::new();
        let id = form.add_guest_field();

        assert_eq!(form.guests().len(), 2);
        assert_eq!(form.guests()[1].id, id);
        assert!(form.is_last(&id));
        assert!(!form.is_last(&form.guests()[0].id.clone()));
    }

    #[test]
    fn test_update_only_touches_target() {
        let mut form = RsvpForm::new();
        let first = form.guests()[0].id.clone();
        let second = form.add_guest_field();

        form.update_guest_name(&second, "Bia").unwrap();
        form.update_guest_name(&first, "Ana").unwrap();

        assert_eq!(form.guests()[0].name, "Ana");
        assert_eq!(form.guests()[1].name, "Bia");
    }

    #[test]
    fn test_update_unknown_guest_fails() {
        let mut form = RsvpForm::new();
        let stranger = GuestId::new();

        let result = form.update_guest_name(&stranger, "Zé");
        assert!(matches!(result, Err(InvitationError::UnknownGuest(id)) if id == stranger));
        assert!(form.guests()[0].is_blank());
    }

    #[test]
    fn test_payload_validation() {
        let mut form = RsvpForm::new();
        assert_eq!(form.payload(), Err(ValidationFailure::MissingPhone));

        form.set_phone("11999999999");
        assert_eq!(form.payload(), Err(ValidationFailure::NoGuestNames));

        let id = form.guests()[0].id.clone();
        form.update_guest_name(&id, "Ana").unwrap();
        form.add_guest_field();

        let payload = form.payload().unwrap();
        assert_eq!(payload.guests().len(), 1);
        assert_eq!(payload.guests()[0].name, "Ana");
    }
}
