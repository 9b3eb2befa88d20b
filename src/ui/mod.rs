//! UI components for Quillpad
//!
//! The menu bar, the status bar and the shortcuts reference window.

mod menu;
mod shortcuts;
mod status_bar;

pub use menu::{consume_shortcuts, show_menu_bar, MenuAction, MenuState};
pub use shortcuts::ShortcutsPanel;
pub use status_bar::{show_status_bar, StatusInfo};
