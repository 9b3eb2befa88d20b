//! Theme Manager for Quillpad
//!
//! Keeps the selected theme and pushes the matching egui `Visuals` into the
//! context whenever it changes.

use eframe::egui::{Context, Visuals};
use log::{debug, info};

use super::{dark, light, ThemeColors};
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    /// Current theme setting
    current_theme: Theme,
    /// Whether the theme needs to be reapplied
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial theme.
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            needs_apply: true,
        }
    }

    /// Get the current theme setting.
    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Set the theme and mark for reapplication.
    ///
    /// This doesn't apply the theme immediately - call `apply_if_needed()` to
    /// update the UI.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.needs_apply = true;
        }
    }

    /// Apply the theme only if it changed since the last call.
    ///
    /// Returns `true` if the theme was applied.
    pub fn apply_if_needed(&mut self, ctx: &Context) -> bool {
        if !self.needs_apply {
            return false;
        }
        ctx.set_visuals(self.visuals());
        self.needs_apply = false;
        debug!("Applied theme: {:?}", self.current_theme);
        true
    }

    /// The egui visuals for the current theme.
    pub fn visuals(&self) -> Visuals {
        match self.current_theme {
            Theme::Light => light::create_light_visuals(),
            Theme::Dark => dark::create_dark_visuals(),
        }
    }

    /// Colors for hand-drawn UI parts.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme)
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_needs_apply() {
        let manager = ThemeManager::new(Theme::Dark);
        assert_eq!(manager.current_theme(), Theme::Dark);
        assert!(manager.needs_apply);
    }

    #[test]
    fn test_apply_clears_flag() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Dark);

        assert!(manager.apply_if_needed(&ctx));
        assert!(!manager.needs_apply);
        assert!(!manager.apply_if_needed(&ctx));
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_set_same_theme_is_noop() {
        let ctx = Context::default();
        let mut manager = ThemeManager::new(Theme::Light);
        manager.apply_if_needed(&ctx);

        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply);

        manager.set_theme(Theme::Dark);
        assert!(manager.needs_apply);
        assert_eq!(manager.colors(), ThemeColors::dark());
    }

    #[test]
    fn test_visuals_follow_theme() {
        assert!(!ThemeManager::new(Theme::Light).visuals().dark_mode);
        assert!(ThemeManager::new(Theme::Dark).visuals().dark_mode);
    }
}
