//! Acknowledgment overlay shown after a successful RSVP.
//!
//! Fades in through CSS; the card removes it when the flow's
//! acknowledgment expires. There is no way to dismiss it early.

use dioxus::prelude::*;

#[component]
pub fn ThankYouOverlay() -> Element {
    rsx! {
        div { class: "thank-you-overlay",
            "🎉 Obrigado por confirmar! Nos vemos em breve! 🎊"
        }
    }
}
