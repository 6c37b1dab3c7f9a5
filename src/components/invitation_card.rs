//! Invitation Card Component
//!
//! The card itself: image, event details and the confirm button, plus the
//! overlays driven by the card's [`InvitationFlow`].

use dioxus::prelude::*;
use invitation_core::{CardState, InvitationFlow};
use invitation_ui::{Button, ButtonVariant};
use tokio::time::Instant;

use super::{ImageViewer, RsvpFormOverlay, ThankYouOverlay};
use crate::context::use_card_config;

/// Invitation Card
///
/// Each card owns its own flow; nothing is shared between cards.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     InvitationCard {
///         image: "assets/invitation.png".to_string(),
///         title: "Chá Revelação!".to_string(),
///         description: "...".to_string(),
///         date: "30 de Março de 2025".to_string(),
///         time: "13h30".to_string(),
///         location: "Vinhedo, SP".to_string(),
///     }
/// }
/// ```
#[component]
pub fn InvitationCard(
    image: String,
    title: String,
    description: String,
    date: String,
    time: String,
    location: String,
) -> Element {
    let config = use_card_config();
    let mut flow = use_signal(|| InvitationFlow::new(config.acknowledgment));
    use_acknowledgment_timer(flow);

    let state = flow.read().state();
    let confirmed = flow.read().is_confirmed();

    // The image pulses until someone opens it
    let image_class = if state.is_image_expanded() {
        "invitation-image"
    } else {
        "invitation-image pulse"
    };
    let confirm_variant = if confirmed {
        ButtonVariant::Confirmed
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        article { class: "invitation-card",
            img {
                class: "{image_class}",
                src: "{image}",
                alt: "Convite",
                onclick: move |_| {
                    if let Err(e) = flow.write().open_image() {
                        tracing::debug!("Ignoring image click: {}", e);
                    }
                },
            }

            div { class: "invitation-body",
                h2 { class: "invitation-title", "{title}" }
                p { class: "invitation-description", "{description}" }

                div { class: "invitation-details",
                    p { "📅 " strong { "Data:" } " {date}" }
                    p { "⏰ " strong { "Hora:" } " {time}" }
                    p { "📍 " strong { "Local:" } " {location}" }
                }

                Button {
                    variant: confirm_variant,
                    class: "confirm-btn".to_string(),
                    disabled: confirmed,
                    onclick: move |_| {
                        if let Err(e) = flow.write().open_form() {
                            tracing::debug!("Ignoring confirm click: {}", e);
                        }
                    },
                    if confirmed {
                        "Presença Confirmada ✅"
                    } else {
                        "Confirmar Presença"
                    }
                }
            }

            if state.is_image_expanded() {
                ImageViewer {
                    image: image.clone(),
                    on_close: move |_| {
                        if let Err(e) = flow.write().close_image() {
                            tracing::debug!("Ignoring backdrop click: {}", e);
                        }
                    },
                }
            }

            if state.is_form_visible() {
                RsvpFormOverlay { flow }
            }

            if state.is_thanking() {
                ThankYouOverlay {}
            }
        }
    }
}

/// Hide the acknowledgment when its time is up.
///
/// Runs in the caller's scope, so the timer is dropped with the card.
pub(crate) fn use_acknowledgment_timer(mut flow: Signal<InvitationFlow>) {
    use_effect(move || {
        if let CardState::Thanking { until } = flow.read().state() {
            spawn(async move {
                tokio::time::sleep_until(until).await;
                flow.write().expire_acknowledgment(Instant::now());
            });
        }
    });
}
