//! RSVP Form Overlay
//!
//! Guest name rows, the phone field and the submit button. Submitting
//! validates through the flow, posts the payload with the shared
//! submitter, then either hands over to the acknowledgment or alerts and
//! leaves the form open for another try. The form is inert while the
//! request is in flight and while an alert is up.

use dioxus::desktop::use_window;
use dioxus::prelude::*;
use invitation_core::{InvitationError, InvitationFlow};
use invitation_ui::{Button, ButtonVariant, Input};
use tokio::time::Instant;

use super::alert::{show_alert, TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
use crate::context::use_submitter;

#[component]
pub fn RsvpFormOverlay(mut flow: Signal<InvitationFlow>) -> Element {
    let submitter = use_submitter();
    let window = use_window();

    let (rows, phone, submitting, inert) = {
        let current = flow.read();
        let form = current.form();
        let rows: Vec<_> = form
            .guests()
            .iter()
            .map(|guest| (guest.clone(), form.is_last(&guest.id)))
            .collect();
        let submitting = current.state().is_submitting();
        (
            rows,
            form.phone().to_string(),
            submitting,
            submitting || current.is_alert_pending(),
        )
    };

    let submit = move |_: ()| {
        let begun = flow.write().begin_submission();
        let payload = match begun {
            Ok(payload) => payload,
            Err(InvitationError::Validation(reason)) => {
                tracing::warn!("RSVP not sent: {}", reason);
                let window = window.clone();
                spawn(async move {
                    show_alert(&window, VALIDATION_MESSAGE).await;
                    flow.write().acknowledge_alert();
                });
                return;
            }
            Err(e) => {
                tracing::debug!("Ignoring submit: {}", e);
                return;
            }
        };

        let submitter = submitter.clone();
        let window = window.clone();
        spawn(async move {
            let outcome = submitter.submit(&payload).await;
            if let Err(e) = flow.write().complete_submission(&outcome, Instant::now()) {
                tracing::error!("Submission finished in unexpected state: {}", e);
            }

            match outcome {
                Ok(()) => {
                    tracing::info!("RSVP sent for {} guest(s)", payload.guests().len());
                }
                Err(e) => {
                    tracing::warn!("RSVP delivery failed: {}", e);
                    show_alert(&window, TRANSPORT_MESSAGE).await;
                    flow.write().acknowledge_alert();
                }
            }
        });
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "rsvp-modal",
                h2 { class: "modal-title", "Confirme sua Presença" }

                for (guest, is_last) in rows {
                    {
                        let id = guest.id.clone();
                        rsx! {
                            GuestRow {
                                key: "{guest.id}",
                                name: guest.name,
                                show_add: is_last,
                                disabled: inert,
                                on_rename: move |name: String| {
                                    if let Err(e) = flow.write().update_guest_name(&id, name) {
                                        tracing::debug!("Ignoring edit: {}", e);
                                    }
                                },
                                on_add: move |_| {
                                    flow.write().add_guest_field();
                                },
                            }
                        }
                    }
                }

                div { class: "phone-row",
                    Input {
                        value: phone,
                        input_type: "tel".to_string(),
                        placeholder: "Telefone".to_string(),
                        disabled: inert,
                        oninput: move |value: String| flow.write().set_phone(value),
                    }
                }

                Button {
                    class: "submit-btn".to_string(),
                    disabled: inert,
                    onclick: submit,
                    if submitting {
                        "Enviando..."
                    } else {
                        "Enviar"
                    }
                }
            }
        }
    }
}

/// One guest name input, with the "+" control on the last row
#[component]
fn GuestRow(
    name: String,
    show_add: bool,
    disabled: bool,
    on_rename: EventHandler<String>,
    on_add: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "guest-row",
            Input {
                value: name,
                placeholder: "Nome".to_string(),
                disabled,
                oninput: move |value: String| on_rename.call(value),
            }
            if show_add {
                Button {
                    variant: ButtonVariant::Add,
                    disabled,
                    onclick: move |_| on_add.call(()),
                    "+"
                }
            }
        }
    }
}
