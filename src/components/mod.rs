//! UI Components for the invitation card.

mod alert;
mod image_viewer;
mod invitation_card;
mod rsvp_form;
mod thank_you;

pub use image_viewer::ImageViewer;
pub use invitation_card::InvitationCard;
pub use rsvp_form::RsvpFormOverlay;
pub use thank_you::ThankYouOverlay;
