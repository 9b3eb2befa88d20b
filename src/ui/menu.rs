//! Menu bar and keyboard shortcuts
//!
//! Menu clicks and shortcuts both resolve to a [`MenuAction`] that the app
//! dispatches in one place.

use crate::config::Theme;
use eframe::egui::{self, Key, KeyboardShortcut, Modifiers, Ui};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Shortcuts
// ─────────────────────────────────────────────────────────────────────────────

const COMMAND_SHIFT: Modifiers = Modifiers {
    shift: true,
    ..Modifiers::COMMAND
};

pub const NEW: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
pub const OPEN: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
pub const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const SAVE_AS: KeyboardShortcut = KeyboardShortcut::new(COMMAND_SHIFT, Key::S);
pub const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
pub const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
pub const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(COMMAND_SHIFT, Key::Z);

// Handled natively by the text widget; listed for menu labels only
pub const CUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::X);
pub const COPY: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::C);
pub const PASTE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::V);
pub const SELECT_ALL: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::A);

/// Shortcuts the app handles itself, most specific first.
///
/// `consume_shortcut` ignores extra Shift, so Ctrl+Shift+S has to be
/// checked before Ctrl+S.
const APP_SHORTCUTS: &[(KeyboardShortcut, MenuAction)] = &[
    (SAVE_AS, MenuAction::SaveAs),
    (REDO_ALT, MenuAction::Redo),
    (NEW, MenuAction::New),
    (OPEN, MenuAction::Open),
    (SAVE, MenuAction::Save),
    (UNDO, MenuAction::Undo),
    (REDO, MenuAction::Redo),
];

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Something the user asked for through the menu bar or a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    OpenRecent(PathBuf),
    ClearRecent,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    ToggleWordWrap,
    ToggleLineNumbers,
    SetTheme(Theme),
    ShowShortcuts,
    About,
}

/// Consume any app shortcut pressed this frame.
///
/// Must run before the editor is drawn so the text widget does not also act
/// on Ctrl+Z and friends.
pub fn consume_shortcuts(ctx: &egui::Context) -> Option<MenuAction> {
    ctx.input_mut(|i| {
        APP_SHORTCUTS
            .iter()
            .find(|(shortcut, _)| i.consume_shortcut(shortcut))
            .map(|(_, action)| action.clone())
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Menu Bar
// ─────────────────────────────────────────────────────────────────────────────

/// What the menu needs to know to enable and check its entries.
pub struct MenuState<'a> {
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_selection: bool,
    pub word_wrap: bool,
    pub show_line_numbers: bool,
    pub theme: Theme,
    pub recent_files: &'a [PathBuf],
}

/// Draw the menu bar. Returns the action picked this frame, if any.
pub fn show_menu_bar(ui: &mut Ui, state: &MenuState<'_>) -> Option<MenuAction> {
    let mut action = None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if item(ui, "New", Some(&NEW), true) {
                action = Some(MenuAction::New);
            }
            if item(ui, "Open…", Some(&OPEN), true) {
                action = Some(MenuAction::Open);
            }
            ui.menu_button("Open Recent", |ui| {
                if let Some(picked) = recent_menu(ui, state.recent_files) {
                    action = Some(picked);
                }
            });
            ui.separator();
            if item(ui, "Save", Some(&SAVE), true) {
                action = Some(MenuAction::Save);
            }
            if item(ui, "Save As…", Some(&SAVE_AS), true) {
                action = Some(MenuAction::SaveAs);
            }
            ui.separator();
            if item(ui, "Exit", None, true) {
                action = Some(MenuAction::Exit);
            }
        });

        ui.menu_button("Edit", |ui| {
            if item(ui, "Undo", Some(&UNDO), state.can_undo) {
                action = Some(MenuAction::Undo);
            }
            if item(ui, "Redo", Some(&REDO), state.can_redo) {
                action = Some(MenuAction::Redo);
            }
            ui.separator();
            if item(ui, "Cut", Some(&CUT), state.has_selection) {
                action = Some(MenuAction::Cut);
            }
            if item(ui, "Copy", Some(&COPY), state.has_selection) {
                action = Some(MenuAction::Copy);
            }
            if item(ui, "Paste", Some(&PASTE), true) {
                action = Some(MenuAction::Paste);
            }
            ui.separator();
            if item(ui, "Select All", Some(&SELECT_ALL), true) {
                action = Some(MenuAction::SelectAll);
            }
        });

        ui.menu_button("View", |ui| {
            let mut wrap = state.word_wrap;
            if ui.checkbox(&mut wrap, "Wrap Lines").clicked() {
                action = Some(MenuAction::ToggleWordWrap);
                ui.close_menu();
            }
            let mut numbers = state.show_line_numbers;
            if ui.checkbox(&mut numbers, "Line Numbers").clicked() {
                action = Some(MenuAction::ToggleLineNumbers);
                ui.close_menu();
            }
            ui.separator();
            ui.menu_button("Theme", |ui| {
                for theme in Theme::all() {
                    if ui.radio(state.theme == *theme, theme.label()).clicked() {
                        action = Some(MenuAction::SetTheme(*theme));
                        ui.close_menu();
                    }
                }
            });
        });

        ui.menu_button("Help", |ui| {
            if item(ui, "Keyboard Shortcuts", None, true) {
                action = Some(MenuAction::ShowShortcuts);
            }
            if item(ui, "About Quillpad", None, true) {
                action = Some(MenuAction::About);
            }
        });
    });

    action
}

/// A menu entry with its shortcut shown on the right. Closes the menu when
/// clicked.
fn item(ui: &mut Ui, label: &str, shortcut: Option<&KeyboardShortcut>, enabled: bool) -> bool {
    let mut button = egui::Button::new(label);
    if let Some(shortcut) = shortcut {
        button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
    }

    let clicked = ui.add_enabled(enabled, button).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

fn recent_menu(ui: &mut Ui, recent_files: &[PathBuf]) -> Option<MenuAction> {
    if recent_files.is_empty() {
        ui.add_enabled(false, egui::Button::new("No recent files"));
        return None;
    }

    let mut action = None;
    for path in recent_files {
        let clicked = ui
            .button(recent_label(path))
            .on_hover_text(path.display().to_string())
            .clicked();
        if clicked {
            action = Some(MenuAction::OpenRecent(path.clone()));
            ui.close_menu();
        }
    }

    ui.separator();
    if ui.button("Clear Recent Files").clicked() {
        action = Some(MenuAction::ClearRecent);
        ui.close_menu();
    }
    action
}

/// File name of a recent entry, falling back to the full path.
fn recent_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Context, Event, RawInput};

    fn press(key: Key, modifiers: Modifiers) -> Option<MenuAction> {
        let ctx = Context::default();
        let mut input = RawInput::default();
        input.modifiers = modifiers;
        input.events.push(Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });

        let mut action = None;
        let _ = ctx.run(input, |ctx| {
            action = consume_shortcuts(ctx);
        });
        action
    }

    #[test]
    fn test_plain_shortcuts() {
        assert_eq!(press(Key::N, Modifiers::COMMAND), Some(MenuAction::New));
        assert_eq!(press(Key::O, Modifiers::COMMAND), Some(MenuAction::Open));
        assert_eq!(press(Key::S, Modifiers::COMMAND), Some(MenuAction::Save));
        assert_eq!(press(Key::Z, Modifiers::COMMAND), Some(MenuAction::Undo));
        assert_eq!(press(Key::Y, Modifiers::COMMAND), Some(MenuAction::Redo));
    }

    #[test]
    fn test_shift_variants_win() {
        assert_eq!(press(Key::S, COMMAND_SHIFT), Some(MenuAction::SaveAs));
        assert_eq!(press(Key::Z, COMMAND_SHIFT), Some(MenuAction::Redo));
    }

    #[test]
    fn test_unbound_keys_are_left_alone() {
        assert_eq!(press(Key::S, Modifiers::NONE), None);
        assert_eq!(press(Key::C, Modifiers::COMMAND), None);
        assert_eq!(press(Key::A, Modifiers::COMMAND), None);
    }

    #[test]
    fn test_recent_label() {
        assert_eq!(recent_label(Path::new("/home/me/notes.txt")), "notes.txt");
        assert_eq!(recent_label(Path::new("/")), "/");
    }
}
