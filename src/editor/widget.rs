//! Text editor widget for Quillpad
//!
//! Wraps egui's multiline `TextEdit` in a scroll area, with optional word
//! wrap and line-number gutter, and keeps the `Document`'s undo history,
//! caret and selection in sync with what the user does in the widget.

use super::line_numbers::{count_lines, gutter_width, line_col_at};
use crate::state::Document;
use crate::theme::ThemeColors;
use eframe::egui::{self, FontId, ScrollArea, TextEdit, Ui};
use eframe::egui::text::{CCursor, CCursorRange};
use log::debug;
use std::sync::Arc;

/// Result of showing the editor widget.
pub struct EditorOutput {
    /// Whether the user changed the text this frame.
    pub changed: bool,
}

/// The main text area.
///
/// # Example
///
/// ```ignore
/// EditorWidget::new(&mut document, theme.colors())
///     .font_size(settings.font_size)
///     .word_wrap(settings.word_wrap)
///     .show_line_numbers(settings.show_line_numbers)
///     .show(ui);
/// ```
pub struct EditorWidget<'a> {
    document: &'a mut Document,
    colors: ThemeColors,
    font_size: f32,
    word_wrap: bool,
    show_line_numbers: bool,
}

impl<'a> EditorWidget<'a> {
    pub fn new(document: &'a mut Document, colors: ThemeColors) -> Self {
        Self {
            document,
            colors,
            font_size: 14.0,
            word_wrap: true,
            show_line_numbers: false,
        }
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn word_wrap(mut self, wrap: bool) -> Self {
        self.word_wrap = wrap;
        self
    }

    #[must_use]
    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Show the editor widget and return the output.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        // content_version is part of the id so the TextEdit drops its cached
        // state and re-reads the string after an external change
        let id = ui.id().with("editor").with(self.document.content_version());

        if let Some((start, end)) = self.document.take_pending_selection() {
            let mut state = TextEdit::load_state(ui.ctx(), id).unwrap_or_default();
            state.cursor.set_char_range(Some(CCursorRange::two(
                CCursor::new(start),
                CCursor::new(end),
            )));
            state.store(ui.ctx(), id);
        }

        let needs_focus = std::mem::take(&mut self.document.needs_focus);
        let original_content = self.document.content.clone();

        let font_size = self.font_size;
        let font_id = FontId::monospace(font_size);
        let word_wrap = self.word_wrap;
        let colors = self.colors;

        let layout_font = font_id.clone();
        let mut layouter = move |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let job = if word_wrap {
                egui::text::LayoutJob::simple(
                    text.to_owned(),
                    layout_font.clone(),
                    colors.text,
                    wrap_width,
                )
            } else {
                egui::text::LayoutJob::simple_singleline(
                    text.to_owned(),
                    layout_font.clone(),
                    colors.text,
                )
            };
            ui.fonts(|f| f.layout_job(job))
        };

        let gutter = self
            .show_line_numbers
            .then(|| gutter_width(count_lines(&self.document.content), font_size));

        let scroll_area = if word_wrap {
            ScrollArea::vertical()
        } else {
            ScrollArea::both()
        };

        let content = &mut self.document.content;
        let text_output = scroll_area
            .id_source(id.with("scroll"))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let gutter_rect = gutter.map(|width| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(width, ui.available_height()),
                            egui::Sense::hover(),
                        );
                        rect
                    });

                    let output = TextEdit::multiline(content)
                        .id(id)
                        .frame(false)
                        .font(font_id.clone())
                        .desired_width(f32::INFINITY)
                        .desired_rows(1)
                        .lock_focus(true)
                        .layouter(&mut layouter)
                        .show(ui);

                    if needs_focus {
                        output.response.request_focus();
                    }

                    if let Some(rect) = gutter_rect {
                        paint_gutter(ui, rect, &output, font_size, &colors);
                    }

                    output
                })
                .inner
            })
            .inner;

        let changed = self.document.content != original_content;
        if changed {
            // TextEdit edits the string in place; history is ours to keep
            self.document.record_edit(original_content);
            debug!("Editor content changed, recorded for undo");
        }

        if let Some(range) = text_output.cursor_range {
            let primary = range.primary.ccursor.index;
            let secondary = range.secondary.ccursor.index;

            self.document.cursor_index = primary;
            self.document.cursor_position = line_col_at(&self.document.content, primary);
            self.document.selection =
                (primary != secondary).then(|| (primary.min(secondary), primary.max(secondary)));
        }

        EditorOutput { changed }
    }
}

/// Draw line numbers next to the first row of each logical line.
fn paint_gutter(
    ui: &Ui,
    rect: egui::Rect,
    output: &egui::text_edit::TextEditOutput,
    font_size: f32,
    colors: &ThemeColors,
) {
    let painter = ui.painter();
    let galley = &output.galley;
    let galley_pos = output.galley_pos;
    let number_font = FontId::monospace(font_size);
    let right = rect.right() - 12.0;

    // The gutter must cover the full text height even when it outgrows the
    // space allocated up front
    let full = rect.with_max_y(rect.max.y.max(galley_pos.y + galley.size().y));
    painter.rect_filled(full, 0.0, colors.background_secondary);
    painter.vline(
        full.right() - 1.0,
        full.y_range(),
        egui::Stroke::new(1.0, colors.border),
    );

    if galley.rows.is_empty() {
        painter.text(
            egui::pos2(right, galley_pos.y),
            egui::Align2::RIGHT_TOP,
            "1",
            number_font,
            colors.text_muted,
        );
        return;
    }

    let mut line = 1usize;
    let mut at_line_start = true;
    for row in &galley.rows {
        if at_line_start {
            painter.text(
                egui::pos2(right, galley_pos.y + row.min_y()),
                egui::Align2::RIGHT_TOP,
                line.to_string(),
                number_font.clone(),
                colors.text_muted,
            );
        }
        at_line_start = row.ends_with_newline;
        if row.ends_with_newline {
            line += 1;
        }
    }
}
