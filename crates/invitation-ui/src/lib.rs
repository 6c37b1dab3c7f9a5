//! Invitation Card UI Widgets
//!
//! Small presentational Dioxus components shared by the invitation card:
//! buttons and text inputs. They carry no state of their own; the card
//! passes values in and receives events back.
//!
//! Class names match the stylesheet in the desktop binary's theme.

pub mod components;

pub use components::*;
