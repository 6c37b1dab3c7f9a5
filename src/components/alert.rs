//! Blocking alert dialogs.

use dioxus::desktop::DesktopContext;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Shown when the phone or every guest name is blank
pub const VALIDATION_MESSAGE: &str = "Preencha pelo menos um nome e o telefone antes de enviar!";

/// Shown when the webhook call fails
pub const TRANSPORT_MESSAGE: &str = "Erro ao conectar com o Google Sheets!";

/// Show a warning modal to the card's window and wait until it is dismissed
pub async fn show_alert(window: &DesktopContext, message: &str) {
    AsyncMessageDialog::new()
        .set_parent(&*window.window)
        .set_level(MessageLevel::Warning)
        .set_title("Confirmação de Presença")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
