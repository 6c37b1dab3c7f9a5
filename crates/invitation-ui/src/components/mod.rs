//! Reusable widgets for the invitation card

mod button;
mod input;

pub use button::*;
pub use input::*;
