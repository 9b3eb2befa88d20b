//! Main application module for Quillpad
//!
//! This module implements the eframe App trait: it draws the menu bar, the
//! editor and the status bar, routes menu clicks and shortcuts to the editing
//! session, and reacts to the session's events.

use crate::clipboard::SystemClipboard;
use crate::config::{save_config_silent, Settings, WindowSize};
use crate::editor::{EditorWidget, TextStats};
use crate::files::{Dialogs, DiskStore, NativeDialogs};
use crate::session::{Session, SessionEvent};
use crate::state::{Document, TextBuffer};
use crate::theme::ThemeManager;
use crate::ui::{
    consume_shortcuts, show_menu_bar, show_status_bar, MenuAction, MenuState, ShortcutsPanel,
    StatusInfo,
};
use eframe::egui;
use log::{debug, info, warn};

/// Application name shown in the title bar.
pub const APP_NAME: &str = "Quillpad";

/// The session as wired up for the desktop app.
pub type EditorSession = Session<Document, DiskStore, NativeDialogs>;

/// Build the window title: "notes.txt* - Quillpad".
fn window_title(display_name: &str, modified: bool) -> String {
    format!(
        "{}{} - {}",
        display_name,
        if modified { "*" } else { "" },
        APP_NAME
    )
}

fn about_text() -> String {
    format!(
        "{} {}\n\nA simple plain-text editor.",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

/// The main application struct that holds all state and implements eframe::App.
pub struct QuillpadApp {
    /// The document being edited and the file behind it
    session: EditorSession,
    /// User preferences, persisted on exit
    settings: Settings,
    /// Whether `settings` changed since the last save
    settings_dirty: bool,
    theme_manager: ThemeManager,
    clipboard: SystemClipboard,
    /// Open while Help > Keyboard Shortcuts is shown
    shortcuts_panel: Option<ShortcutsPanel>,
    /// Result of the last action, cleared when the user types
    status_message: Option<String>,
    /// Title last sent to the window
    last_title: String,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
}

impl QuillpadApp {
    /// Create the app with previously loaded settings.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        info!("Initializing {}", APP_NAME);

        let mut theme_manager = ThemeManager::new(settings.theme);
        theme_manager.apply_if_needed(&cc.egui_ctx);

        let mut session = Session::new(Document::new(), DiskStore, NativeDialogs);
        session.set_initial_dir(settings.last_directory());

        Self {
            session,
            settings,
            settings_dirty: false,
            theme_manager,
            clipboard: SystemClipboard::new(),
            shortcuts_panel: None,
            status_message: None,
            last_title: String::new(),
            last_window_size: None,
            last_window_pos: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window State
    // ─────────────────────────────────────────────────────────────────────────

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = window_title(
            &self.session.display_name(),
            self.session.buffer().is_modified(),
        );
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }

    /// Remember window size and position for the next launch.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let Some(rect) = ctx.input(|i| i.viewport().outer_rect) else {
            return;
        };
        let size = rect.size();
        let pos = rect.min;

        let size_changed = self
            .last_window_size
            .map(|s| (s - size).length() > 1.0)
            .unwrap_or(true);
        let pos_changed = self
            .last_window_pos
            .map(|p| (p - pos).length() > 1.0)
            .unwrap_or(true);

        if !(size_changed || pos_changed) {
            return;
        }

        self.last_window_size = Some(size);
        self.last_window_pos = Some(pos);

        let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
        self.settings.window_size = WindowSize {
            width: size.x,
            height: size.y,
            x: Some(pos.x),
            y: Some(pos.y),
            maximized,
        };
        self.settings_dirty = true;
        debug!(
            "Window state updated: {}x{} at ({}, {}), maximized: {}",
            size.x, size.y, pos.x, pos.y, maximized
        );
    }

    fn save_settings(&mut self) {
        if save_config_silent(&self.settings) {
            self.settings_dirty = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_action(&mut self, action: MenuAction) {
        debug!("Handling action: {:?}", action);

        match action {
            MenuAction::New => {
                self.session.new_file();
            }
            MenuAction::Open => {
                self.session.open();
            }
            MenuAction::OpenRecent(path) => {
                self.session.open_path(path);
            }
            MenuAction::ClearRecent => {
                self.settings.recent_files.clear();
                self.settings_dirty = true;
            }
            MenuAction::Save => {
                self.session.save();
            }
            MenuAction::SaveAs => {
                self.session.save_as();
            }
            MenuAction::Exit => {
                self.session.exit();
            }
            MenuAction::Undo => {
                let doc = self.session.buffer_mut();
                doc.undo();
                doc.needs_focus = true;
            }
            MenuAction::Redo => {
                let doc = self.session.buffer_mut();
                doc.redo();
                doc.needs_focus = true;
            }
            MenuAction::Cut => self.cut(),
            MenuAction::Copy => self.copy(),
            MenuAction::Paste => self.paste(),
            MenuAction::SelectAll => {
                let doc = self.session.buffer_mut();
                doc.select_all();
                doc.needs_focus = true;
            }
            MenuAction::ToggleWordWrap => {
                self.settings.word_wrap = !self.settings.word_wrap;
                self.settings_dirty = true;
            }
            MenuAction::ToggleLineNumbers => {
                self.settings.show_line_numbers = !self.settings.show_line_numbers;
                self.settings_dirty = true;
            }
            MenuAction::SetTheme(theme) => {
                self.theme_manager.set_theme(theme);
                self.settings.theme = theme;
                self.settings_dirty = true;
            }
            MenuAction::ShowShortcuts => {
                self.shortcuts_panel = Some(ShortcutsPanel::new());
            }
            MenuAction::About => {
                let title = format!("About {}", APP_NAME);
                self.session
                    .dialogs_mut()
                    .alert_info(&title, &about_text());
            }
        }
    }

    fn copy(&mut self) {
        let Some(text) = self.session.buffer().selected_text() else {
            return;
        };
        if let Err(e) = self.clipboard.set_text(&text) {
            warn!("Copy failed: {}", e);
            self.status_message = Some(e.to_string());
        }
        self.session.buffer_mut().needs_focus = true;
    }

    fn cut(&mut self) {
        let Some(text) = self.session.buffer().selected_text() else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => self.session.buffer_mut().replace_selection(""),
            Err(e) => {
                warn!("Cut failed: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
        self.session.buffer_mut().needs_focus = true;
    }

    fn paste(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) => self.session.buffer_mut().replace_selection(&text),
            Err(e) => {
                warn!("Paste failed: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
        self.session.buffer_mut().needs_focus = true;
    }

    /// React to what the session did since the last frame.
    fn handle_session_events(&mut self) {
        for event in self.session.take_events() {
            match event {
                SessionEvent::Cleared => {
                    self.status_message = Some("New file".to_string());
                }
                SessionEvent::Opened(path) => {
                    self.status_message = Some(format!("Opened: {}", path.display()));
                    self.settings.add_recent_file(path);
                    self.settings_dirty = true;
                }
                SessionEvent::OpenFailed(path) => {
                    if self.settings.remove_recent_file(&path) {
                        self.settings_dirty = true;
                    }
                    self.status_message = Some(format!("Could not open: {}", path.display()));
                }
                SessionEvent::Saved(path) => {
                    self.status_message = Some(format!("Saved: {}", path.display()));
                    self.settings.add_recent_file(path);
                    self.settings_dirty = true;
                }
                SessionEvent::ExitRequested => {
                    self.shortcuts_panel = None;
                    self.save_settings();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw the whole window. Returns the menu action picked, if any.
    fn render_ui(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        let colors = self.theme_manager.colors();

        let menu_action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| {
                let doc = self.session.buffer();
                let state = MenuState {
                    can_undo: doc.can_undo(),
                    can_redo: doc.can_redo(),
                    has_selection: doc.selected_text().is_some(),
                    word_wrap: self.settings.word_wrap,
                    show_line_numbers: self.settings.show_line_numbers,
                    theme: self.theme_manager.current_theme(),
                    recent_files: &self.settings.recent_files,
                };
                show_menu_bar(ui, &state)
            })
            .inner;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let doc = self.session.buffer();
            let info = StatusInfo {
                message: self.status_message.as_deref(),
                path: self.session.current_path(),
                modified: doc.is_modified(),
                cursor: doc.cursor_position,
                stats: TextStats::from_text(&doc.content),
            };
            show_status_bar(ui, &info, &colors);
        });

        let editor_frame = egui::Frame::central_panel(&ctx.style()).fill(colors.background);
        egui::CentralPanel::default()
            .frame(editor_frame)
            .show(ctx, |ui| {
                let output = EditorWidget::new(self.session.buffer_mut(), colors)
                    .font_size(self.settings.font_size)
                    .word_wrap(self.settings.word_wrap)
                    .show_line_numbers(self.settings.show_line_numbers)
                    .show(ui);

                if output.changed {
                    self.status_message = None;
                }
            });

        if let Some(panel) = self.shortcuts_panel.as_mut() {
            if panel.show(ctx, &colors).close_requested {
                self.shortcuts_panel = None;
            }
        }

        menu_action
    }
}

impl eframe::App for QuillpadApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_manager.apply_if_needed(ctx);
        self.update_window_state(ctx);

        // The close button runs the same confirmation as File > Exit
        if ctx.input(|i| i.viewport().close_requested()) && !self.session.exit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.handle_action(MenuAction::Exit);
        }

        // Shortcuts go first so the text widget never sees Ctrl+Z and friends
        if let Some(action) = consume_shortcuts(ctx) {
            self.handle_action(action);
        }

        if let Some(action) = self.render_ui(ctx) {
            self.handle_action(action);
        }

        self.handle_session_events();
        self.update_title(ctx);

        if self.session.exit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
        if self.settings_dirty {
            self.save_settings();
        }
    }

    /// Save persistent state.
    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if self.settings_dirty {
            debug!("Saving settings");
            self.save_settings();
        }
    }

    /// Auto-save interval for settings.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        assert_eq!(window_title("Untitled", false), "Untitled - Quillpad");
        assert_eq!(window_title("notes.txt", true), "notes.txt* - Quillpad");
    }

    #[test]
    fn test_about_text_names_version() {
        let text = about_text();
        assert!(text.starts_with(APP_NAME));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
