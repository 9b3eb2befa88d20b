//! Theme System for Quillpad
//!
//! `ThemeColors` holds the handful of colors the editor paints itself (the
//! line-number gutter and the status bar). Everything else comes from the
//! egui `Visuals` built in `light.rs` and `dark.rs` and applied by the
//! `ThemeManager`.

pub mod dark;
pub mod light;
pub mod manager;

pub use manager::ThemeManager;

use crate::config::Theme;
use eframe::egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// Colors for the parts of the UI drawn by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Main panel and editor background
    pub background: Color32,
    /// Slightly offset background (gutter, status bar)
    pub background_secondary: Color32,
    /// Regular text
    pub text: Color32,
    /// De-emphasized text (line numbers, status details)
    pub text_muted: Color32,
    /// Thin separators
    pub border: Color32,
    /// Selection highlight
    pub selection: Color32,
    /// Accent used for focus strokes
    pub accent: Color32,
    /// "Modified" marker in the status bar
    pub modified: Color32,
}

impl ThemeColors {
    /// Colors for the given theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(255, 255, 255),
            background_secondary: Color32::from_rgb(246, 246, 244),
            text: Color32::from_rgb(30, 30, 30),
            text_muted: Color32::from_rgb(128, 128, 128),
            border: Color32::from_rgb(214, 214, 210),
            selection: Color32::from_rgb(184, 212, 250),
            accent: Color32::from_rgb(45, 110, 200),
            modified: Color32::from_rgb(190, 110, 20),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 32),
            background_secondary: Color32::from_rgb(38, 38, 41),
            text: Color32::from_rgb(220, 220, 220),
            text_muted: Color32::from_rgb(130, 130, 135),
            border: Color32::from_rgb(60, 60, 64),
            selection: Color32::from_rgb(40, 75, 120),
            accent: Color32::from_rgb(90, 150, 230),
            modified: Color32::from_rgb(230, 170, 70),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_theme_matches_variant() {
        assert_eq!(ThemeColors::from_theme(Theme::Light), ThemeColors::light());
        assert_eq!(ThemeColors::from_theme(Theme::Dark), ThemeColors::dark());
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for colors in [ThemeColors::light(), ThemeColors::dark()] {
            let bg = colors.background.r() as i32;
            let fg = colors.text.r() as i32;
            assert!((bg - fg).abs() > 150, "low contrast in {:?}", colors);
        }
    }
}
