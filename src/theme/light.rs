//! Light theme visuals

use eframe::egui::{Rounding, Stroke, Visuals};

use super::ThemeColors;

/// Create egui Visuals for the light theme.
pub fn create_light_visuals() -> Visuals {
    let colors = ThemeColors::light();
    let mut visuals = Visuals::light();

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Panel Background
    // ─────────────────────────────────────────────────────────────────────────
    visuals.panel_fill = colors.background_secondary;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.background_secondary;

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    // ─────────────────────────────────────────────────────────────────────────
    // Widgets
    // ─────────────────────────────────────────────────────────────────────────
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);
    visuals.widgets.inactive.rounding = Rounding::same(3.0);
    visuals.widgets.hovered.rounding = Rounding::same(3.0);
    visuals.widgets.active.rounding = Rounding::same(3.0);

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_visuals_are_light() {
        let visuals = create_light_visuals();
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.extreme_bg_color, ThemeColors::light().background);
    }
}
