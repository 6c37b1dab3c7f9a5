//! Core types for the invitation card

use std::path::Path;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{InvitationResult, ValidationFailure};

/// Stable identifier for a guest field
///
/// Edits address a guest by id rather than by position, so a stale index
/// can never touch the wrong entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuestId(pub Ulid);

impl GuestId {
    /// Create a new GuestId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

}

impl Default for GuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guest_{}", self.0)
    }
}

/// One name row of the RSVP form
///
/// Only `name` goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestEntry {
    #[serde(skip)]
    pub id: GuestId,
    pub name: String,
}

impl GuestEntry {
    /// Create an entry with an empty name
    pub fn blank() -> Self {
        Self {
            id: GuestId::new(),
            name: String::new(),
        }
    }

    /// Create an entry with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: GuestId::new(),
            name: name.into(),
        }
    }

    /// Whether the name is empty once surrounding whitespace is ignored
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Body POSTed to the webhook
///
/// Can only be built through [`SubmissionPayload::new`], which guarantees a
/// non-blank phone and at least one guest, every one of them named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    guests: Vec<GuestEntry>,
    phone: String,
}

impl SubmissionPayload {
    /// Build a payload from raw form contents, dropping blank-named guests.
    ///
    /// Names and phone are kept exactly as typed.
    pub fn new<'a>(
        guests: impl IntoIterator<Item = &'a GuestEntry>,
        phone: &str,
    ) -> Result<Self, ValidationFailure> {
        if phone.trim().is_empty() {
            return Err(ValidationFailure::MissingPhone);
        }

        let guests: Vec<GuestEntry> = guests
            .into_iter()
            .filter(|guest| !guest.is_blank())
            .cloned()
            .collect();
        if guests.is_empty() {
            return Err(ValidationFailure::NoGuestNames);
        }

        Ok(Self {
            guests,
            phone: phone.to_string(),
        })
    }

    pub fn guests(&self) -> &[GuestEntry] {
        &self.guests
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Event metadata shown on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Image path or URL
    pub image: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl EventDetails {
    /// Load event details from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> InvitationResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            image: "assets/invitation.png".to_string(),
            title: "Chá Revelação!".to_string(),
            description: "É com tremenda alegria que convidamos vocês para estarem conosco nesta descoberta!".to_string(),
            date: "30 de Março de 2025".to_string(),
            time: "13h30".to_string(),
            location: "Estrada da Boiada, 1471 - Jardim Primavera, Vinhedo, SP".to_string(),
        }
    }
}
