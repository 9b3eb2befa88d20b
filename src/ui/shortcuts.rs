//! Keyboard shortcuts reference window (Help > Keyboard Shortcuts)

use super::menu;
use crate::theme::ThemeColors;
use eframe::egui::{self, KeyboardShortcut, RichText, Ui};

/// Keyboard shortcut category for organized display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCategory {
    File,
    Edit,
}

impl ShortcutCategory {
    /// Get all categories in display order.
    pub fn all() -> &'static [ShortcutCategory] {
        &[ShortcutCategory::File, ShortcutCategory::Edit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShortcutCategory::File => "File",
            ShortcutCategory::Edit => "Edit",
        }
    }
}

/// Shortcuts listed under a category.
fn shortcuts(category: ShortcutCategory) -> &'static [(KeyboardShortcut, &'static str)] {
    match category {
        ShortcutCategory::File => &[
            (menu::NEW, "New File"),
            (menu::OPEN, "Open File"),
            (menu::SAVE, "Save"),
            (menu::SAVE_AS, "Save As"),
        ],
        ShortcutCategory::Edit => &[
            (menu::UNDO, "Undo"),
            (menu::REDO, "Redo"),
            (menu::REDO_ALT, "Redo"),
            (menu::CUT, "Cut"),
            (menu::COPY, "Copy"),
            (menu::PASTE, "Paste"),
            (menu::SELECT_ALL, "Select All"),
        ],
    }
}

/// Result of showing the shortcuts panel.
#[derive(Debug, Clone, Default)]
pub struct ShortcutsPanelOutput {
    /// Whether the panel should be closed.
    pub close_requested: bool,
}

/// Floating window listing every keyboard shortcut.
#[derive(Debug, Clone, Default)]
pub struct ShortcutsPanel;

impl ShortcutsPanel {
    pub fn new() -> Self {
        Self
    }

    /// Show the panel. Escape or the Close button dismisses it.
    pub fn show(&mut self, ctx: &egui::Context, colors: &ThemeColors) -> ShortcutsPanelOutput {
        let mut output = ShortcutsPanelOutput::default();
        let mut open = true;

        egui::Window::new("Keyboard Shortcuts")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(320.0)
            .show(ctx, |ui| {
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    output.close_requested = true;
                }

                for category in ShortcutCategory::all() {
                    self.show_category(ui, *category, colors);
                    ui.add_space(8.0);
                }

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        output.close_requested = true;
                    }
                });
            });

        if !open {
            output.close_requested = true;
        }
        output
    }

    fn show_category(&self, ui: &mut Ui, category: ShortcutCategory, colors: &ThemeColors) {
        ui.label(RichText::new(category.label()).strong().size(14.0));
        ui.add_space(4.0);

        ui.indent(category.label(), |ui| {
            egui::Grid::new(format!("shortcuts_{:?}", category))
                .num_columns(2)
                .spacing([16.0, 4.0])
                .min_col_width(110.0)
                .show(ui, |ui| {
                    for (shortcut, action) in shortcuts(category) {
                        egui::Frame::none()
                            .fill(colors.background_secondary)
                            .stroke(egui::Stroke::new(1.0, colors.border))
                            .rounding(3.0)
                            .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(ui.ctx().format_shortcut(shortcut))
                                        .family(egui::FontFamily::Monospace)
                                        .size(12.0),
                                );
                            });
                        ui.label(*action);
                        ui.end_row();
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_shortcuts() {
        for category in ShortcutCategory::all() {
            assert!(!shortcuts(*category).is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn test_no_shortcut_listed_twice() {
        let mut seen = Vec::new();
        for category in ShortcutCategory::all() {
            for (shortcut, _) in shortcuts(*category) {
                assert!(!seen.contains(shortcut), "duplicate {:?}", shortcut);
                seen.push(*shortcut);
            }
        }
    }

    #[test]
    fn test_file_shortcuts_start_with_new() {
        let (shortcut, action) = shortcuts(ShortcutCategory::File)[0];
        assert_eq!(shortcut, menu::NEW);
        assert_eq!(action, "New File");
    }
}
