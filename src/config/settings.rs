//! User settings and preferences for Quillpad
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get the display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// All selectable themes, in menu order.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// Serialized to JSON in the user's config directory. Every field has a
/// default, so older or hand-edited files with missing keys still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Color theme
    pub theme: Theme,

    /// Font size for the editor (in points)
    pub font_size: f32,

    /// Whether to show the line number gutter
    pub show_line_numbers: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Editor Behavior
    // ─────────────────────────────────────────────────────────────────────────
    /// Whether long lines wrap at the window edge
    pub word_wrap: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────────────────────
    /// Recently opened or saved files (most recent first)
    pub recent_files: Vec<PathBuf>,

    /// Maximum number of recent files to remember
    pub max_recent_files: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Window State
    // ─────────────────────────────────────────────────────────────────────────
    /// Window size and position
    pub window_size: WindowSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: 14.0,
            show_line_numbers: false,
            word_wrap: true,
            recent_files: Vec::new(),
            max_recent_files: 10,
            window_size: WindowSize::default(),
        }
    }
}

impl Settings {
    /// Add a file to the recent files list.
    ///
    /// If the file already exists in the list, it's moved to the front.
    /// The list is trimmed to `max_recent_files`.
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.max_recent_files);
    }

    /// Remove a file from the recent files list.
    ///
    /// Returns `true` if the entry was present.
    pub fn remove_recent_file(&mut self, path: &PathBuf) -> bool {
        let before = self.recent_files.len();
        self.recent_files.retain(|p| p != path);
        self.recent_files.len() != before
    }

    /// Directory of the most recently used file, if any.
    pub fn last_directory(&self) -> Option<PathBuf> {
        self.recent_files
            .first()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Minimum allowed font size.
    pub const MIN_FONT_SIZE: f32 = 8.0;
    /// Maximum allowed font size.
    pub const MAX_FONT_SIZE: f32 = 72.0;
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 200.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;
    /// Upper bound for the recent files list.
    pub const MAX_RECENT_LIMIT: usize = 50;

    /// Clamp values to valid ranges after loading a possibly hand-edited file.
    pub fn sanitize(&mut self) {
        self.font_size = self
            .font_size
            .clamp(Self::MIN_FONT_SIZE, Self::MAX_FONT_SIZE);

        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        if self.max_recent_files == 0 {
            self.max_recent_files = 10;
        } else if self.max_recent_files > Self::MAX_RECENT_LIMIT {
            self.max_recent_files = Self::MAX_RECENT_LIMIT;
        }
        self.recent_files.truncate(self.max_recent_files);
    }

    /// Deserialize settings and sanitize them in one step.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.font_size, 14.0);
        assert!(settings.word_wrap);
        assert!(!settings.show_line_numbers);
        assert!(settings.recent_files.is_empty());
        assert_eq!(settings.max_recent_files, 10);
    }

    #[test]
    fn test_add_recent_file_moves_to_front() {
        let mut settings = Settings::default();
        settings.add_recent_file(PathBuf::from("/a.txt"));
        settings.add_recent_file(PathBuf::from("/b.txt"));
        settings.add_recent_file(PathBuf::from("/a.txt"));

        assert_eq!(
            settings.recent_files,
            vec![PathBuf::from("/a.txt"), PathBuf::from("/b.txt")]
        );
    }

    #[test]
    fn test_add_recent_file_truncates() {
        let mut settings = Settings {
            max_recent_files: 3,
            ..Settings::default()
        };
        for i in 0..5 {
            settings.add_recent_file(PathBuf::from(format!("/file{}.txt", i)));
        }
        assert_eq!(settings.recent_files.len(), 3);
        assert_eq!(settings.recent_files[0], PathBuf::from("/file4.txt"));
    }

    #[test]
    fn test_remove_recent_file() {
        let mut settings = Settings::default();
        settings.add_recent_file(PathBuf::from("/keep.txt"));
        settings.add_recent_file(PathBuf::from("/gone.txt"));

        assert!(settings.remove_recent_file(&PathBuf::from("/gone.txt")));
        assert!(!settings.remove_recent_file(&PathBuf::from("/gone.txt")));
        assert_eq!(settings.recent_files, vec![PathBuf::from("/keep.txt")]);
    }

    #[test]
    fn test_last_directory() {
        let mut settings = Settings::default();
        assert!(settings.last_directory().is_none());

        settings.add_recent_file(PathBuf::from("/home/me/notes/a.txt"));
        assert_eq!(
            settings.last_directory(),
            Some(PathBuf::from("/home/me/notes"))
        );
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_settings_deserialize_with_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"word_wrap": false}"#).unwrap();
        assert!(!settings.word_wrap);
        assert_eq!(settings.font_size, 14.0);
        assert_eq!(settings.window_size, WindowSize::default());
    }

    #[test]
    fn test_sanitize_clamps_values() {
        let settings = Settings::from_json_sanitized(
            r#"{"font_size": 2.0, "max_recent_files": 0, "window_size": {"width": 50.0, "height": 99999.0}}"#,
        )
        .unwrap();

        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.max_recent_files, 10);
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let mut original = Settings {
            theme: Theme::Dark,
            word_wrap: false,
            ..Settings::default()
        };
        original.add_recent_file(PathBuf::from("/tmp/x.txt"));

        let json = serde_json::to_string(&original).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(original, loaded);
    }
}
