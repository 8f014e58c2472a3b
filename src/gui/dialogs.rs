//! Modal message dialogs for failed actions.

use crate::gui::state::AppError;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Block until the user dismisses a dialog describing `err`.
pub fn show_error(err: &AppError) {
    let (level, title) = if err.is_warning() {
        (MessageLevel::Warning, "Warning")
    } else {
        (MessageLevel::Error, "Error")
    };

    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(err.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}
