use dioxus::prelude::*;

use crate::components::InvitationCard;
use crate::context::use_card_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and centers the invitation card in the window.
#[component]
pub fn App() -> Element {
    let event = use_card_config().event;

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "card-page",
            InvitationCard {
                image: event.image,
                title: event.title,
                description: event.description,
                date: event.date,
                time: event.time,
                location: event.location,
            }
        }
    }
}
