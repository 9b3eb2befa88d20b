//! Status bar at the bottom of the window

use crate::editor::TextStats;
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};
use std::path::Path;

/// Shown when nothing happened yet and the buffer is untouched.
const READY: &str = "Ready";

/// Shown once the user edited the text after the last status message.
const MODIFIED: &str = "Modified";

/// Everything the status bar displays.
pub struct StatusInfo<'a> {
    /// Result of the last action, cleared when the user types
    pub message: Option<&'a str>,
    /// File being edited, shown when hovering the status text
    pub path: Option<&'a Path>,
    pub modified: bool,
    /// 0-indexed (line, column) of the caret
    pub cursor: (usize, usize),
    pub stats: TextStats,
}

/// Left-hand status text.
///
/// A message from the last action wins; otherwise the buffer state.
pub fn left_status<'a>(message: Option<&'a str>, modified: bool) -> &'a str {
    match message {
        Some(message) => message,
        None if modified => MODIFIED,
        None => READY,
    }
}

/// Right-hand status text, e.g. "Ln 3, Col 14  |  42 words, 210 chars".
pub fn position_status(cursor: (usize, usize), stats: &TextStats) -> String {
    format!(
        "Ln {}, Col {}  |  {}",
        cursor.0 + 1,
        cursor.1 + 1,
        stats.format_compact()
    )
}

/// Draw the status bar contents.
pub fn show_status_bar(ui: &mut Ui, info: &StatusInfo<'_>, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        let left = left_status(info.message, info.modified);
        let text = if info.message.is_none() && info.modified {
            RichText::new(left).color(colors.modified)
        } else {
            RichText::new(left)
        };
        let response = ui.label(text);
        if let Some(path) = info.path {
            response.on_hover_text(path.display().to_string());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(position_status(info.cursor, &info.stats)).color(colors.text_muted),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_status_prefers_message() {
        assert_eq!(left_status(Some("Saved: /tmp/a.txt"), true), "Saved: /tmp/a.txt");
        assert_eq!(left_status(None, true), MODIFIED);
        assert_eq!(left_status(None, false), READY);
    }

    #[test]
    fn test_position_status_is_one_based() {
        let stats = TextStats::from_text("hello world");
        assert_eq!(
            position_status((0, 5), &stats),
            "Ln 1, Col 6  |  2 words, 11 chars"
        );
    }
}
