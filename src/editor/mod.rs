//! Editor module for Quillpad
//!
//! The text editor widget and the counting helpers behind its gutter and the
//! status bar.

mod line_numbers;
mod stats;
mod widget;

pub use line_numbers::count_lines;
pub use stats::TextStats;
pub use widget::EditorWidget;
