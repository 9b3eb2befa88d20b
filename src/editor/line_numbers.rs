//! Line and column helpers shared by the gutter and the status bar

/// Horizontal padding around the numbers in the gutter.
const GUTTER_PADDING: f32 = 20.0;

/// Narrowest the gutter gets.
const MIN_GUTTER_WIDTH: f32 = 30.0;

/// Count the number of lines in the given text.
///
/// Returns at least 1 for empty text (representing a single empty line).
pub fn count_lines(text: &str) -> usize {
    text.chars().filter(|&c| c == '\n').count() + 1
}

/// Convert a character index to a 0-indexed (line, column) position.
///
/// Indices past the end resolve to the end of the text.
pub fn line_col_at(text: &str, char_index: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;

    for ch in text.chars().take(char_index) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    (line, col)
}

/// Width of the line-number gutter for `line_count` lines.
///
/// Monospace digits are roughly 0.6 em wide.
pub fn gutter_width(line_count: usize, font_size: f32) -> f32 {
    let digits = line_count.max(1).to_string().len();
    (font_size * 0.6 * digits as f32 + GUTTER_PADDING).max(MIN_GUTTER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("Hello, World!"), 1);
        assert_eq!(count_lines("Line 1\nLine 2\nLine 3"), 3);
        assert_eq!(count_lines("Line 1\n"), 2);
        assert_eq!(count_lines("\n\n\n"), 4);
    }

    #[test]
    fn test_line_col_at_start_and_empty() {
        assert_eq!(line_col_at("", 0), (0, 0));
        assert_eq!(line_col_at("abc", 0), (0, 0));
    }

    #[test]
    fn test_line_col_at_multiline() {
        let text = "Hello\nWorld\n!";
        assert_eq!(line_col_at(text, 5), (0, 5));
        assert_eq!(line_col_at(text, 6), (1, 0));
        assert_eq!(line_col_at(text, 11), (1, 5));
        assert_eq!(line_col_at(text, 12), (2, 0));
    }

    #[test]
    fn test_line_col_at_counts_chars_not_bytes() {
        assert_eq!(line_col_at("ñandú\nçé", 8), (1, 2));
    }

    #[test]
    fn test_line_col_at_past_end() {
        assert_eq!(line_col_at("ab\ncd", 99), (1, 2));
    }

    #[test]
    fn test_gutter_width_grows_with_digits() {
        let narrow = gutter_width(9, 14.0);
        let wide = gutter_width(12_345, 14.0);
        assert!(wide > narrow);
        assert_eq!(gutter_width(0, 1.0), MIN_GUTTER_WIDTH);
    }
}
