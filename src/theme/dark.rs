//! Dark theme visuals

use eframe::egui::{Rounding, Stroke, Visuals};

use super::ThemeColors;

/// Create egui Visuals for the dark theme.
pub fn create_dark_visuals() -> Visuals {
    let colors = ThemeColors::dark();
    let mut visuals = Visuals::dark();

    visuals.panel_fill = colors.background_secondary;
    visuals.window_fill = colors.background_secondary;
    visuals.extreme_bg_color = colors.background;
    visuals.faint_bg_color = colors.background_secondary;

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

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
    fn test_dark_visuals_are_dark() {
        let visuals = create_dark_visuals();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.selection.bg_fill, ThemeColors::dark().selection);
    }
}
