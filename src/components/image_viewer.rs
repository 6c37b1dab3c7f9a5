//! Image Viewer Overlay
//!
//! Full-window view of the invitation image. Any click on the overlay,
//! image included, closes it.

use dioxus::prelude::*;

#[component]
pub fn ImageViewer(
    /// Image path or URL
    image: String,
    /// Callback when the overlay is clicked
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay image-viewer",
            onclick: move |_| on_close.call(()),

            img {
                class: "image-viewer-image",
                src: "{image}",
                alt: "Convite Ampliado",
            }
        }
    }
}
