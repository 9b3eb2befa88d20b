//! Native dialog integration using the rfd crate
//!
//! This module defines the `Dialogs` surface the session uses to ask the user
//! for paths and decisions, and its native implementation. All calls block
//! until the user dismisses the dialog.

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

/// Extensions listed under the "Text Files" filter.
const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];

/// Answer to a save/discard/cancel question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Save first, then continue
    Yes,
    /// Continue without saving
    No,
    /// Abort the action
    Cancel,
}

/// Everything the session needs to ask the user.
pub trait Dialogs {
    /// Ask for an existing file to open. `None` if cancelled.
    fn pick_open_path(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask for a destination to save to. `None` if cancelled.
    ///
    /// `default_ext` is the extension (without dot) the filter list starts on;
    /// the caller still applies it when the returned name has none.
    fn pick_save_path(
        &mut self,
        initial_dir: Option<&Path>,
        default_name: &str,
        default_ext: &str,
    ) -> Option<PathBuf>;

    /// Ask a yes/no/cancel question.
    fn confirm_yes_no_cancel(&mut self, title: &str, message: &str) -> Confirmation;

    /// Show a modal error message.
    fn alert_error(&mut self, message: &str);

    /// Show a modal informational message.
    fn alert_info(&mut self, title: &str, message: &str);
}

/// `Dialogs` implemented with the platform's native dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_open_path(&mut self, initial_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Open File")
            .add_filter("Text Files", TEXT_EXTENSIONS)
            .add_filter("All Files", &["*"]);

        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }

        dialog.pick_file()
    }

    fn pick_save_path(
        &mut self,
        initial_dir: Option<&Path>,
        default_name: &str,
        default_ext: &str,
    ) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Save As")
            .add_filter("Text Files", &[default_ext])
            .add_filter("All Files", &["*"])
            .set_file_name(default_name);

        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }

        dialog.save_file()
    }

    fn confirm_yes_no_cancel(&mut self, title: &str, message: &str) -> Confirmation {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNoCancel)
            .show();

        match result {
            MessageDialogResult::Yes => Confirmation::Yes,
            MessageDialogResult::No => Confirmation::No,
            // Closing the dialog any other way is a cancel
            _ => Confirmation::Cancel,
        }
    }

    fn alert_error(&mut self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn alert_info(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
