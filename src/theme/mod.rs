//! Visual theme for the invitation card.

mod styles;

pub use styles::GLOBAL_STYLES;
