//! User-facing message boxes.
//!
//! Modal dialogs go through the native `rfd` message dialog (information /
//! warning / critical). For non-blocking notices inside the egui UI there is
//! a small [`Popup`] window wrapper.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

fn show_message(title: &str, message: &str, level: MessageLevel) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Show a modal informational message box.
pub fn information(title: &str, message: &str) {
    show_message(title, message, MessageLevel::Info);
}

/// Show a modal warning message box.
pub fn warning(title: &str, message: &str) {
    show_message(title, message, MessageLevel::Warning);
}

/// Show a modal critical-error message box.
pub fn critical(title: &str, message: &str) {
    show_message(title, message, MessageLevel::Error);
}

/// A non-blocking notice window rendered inside the egui UI.
///
/// Keep one per notice in application state and call [`Popup::show`] each
/// frame; the window disappears once the user closes it.
#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub message: String,
    pub open: bool,
}

impl Popup {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            open: true,
        }
    }

    /// Render the popup window. Returns `false` once it has been closed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }
        let mut open = self.open;
        egui::Window::new(&self.title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&self.message);
            });
        self.open = open;
        self.open
    }
}
