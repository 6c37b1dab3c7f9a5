//! Card context for the invitation window.
//!
//! `main` hands the configuration and the webhook client to the launcher;
//! components read them back with these hooks.
//!
//! ```ignore
//! let config = use_card_config();
//! let submitter = use_submitter();
//! ```

use dioxus::prelude::*;
use invitation_core::{CardConfig, SharedSubmitter};

/// Hook to access the card configuration from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to access the RSVP submitter from context.
pub fn use_submitter() -> SharedSubmitter {
    use_context::<SharedSubmitter>()
}
