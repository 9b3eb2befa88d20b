//! Text statistics for the status bar

use super::count_lines;

/// Word, character and line counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of words (runs of non-whitespace characters)
    pub words: usize,
    /// Number of characters including whitespace
    pub characters: usize,
    /// Number of lines (including empty lines)
    pub lines: usize,
}

impl TextStats {
    /// Calculate statistics from the given text in a single pass.
    pub fn from_text(text: &str) -> Self {
        let mut words = 0;
        let mut characters = 0;
        let mut in_word = false;

        for ch in text.chars() {
            characters += 1;
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                words += 1;
            }
        }

        Self {
            words,
            characters,
            lines: count_lines(text),
        }
    }

    /// Compact form for the status bar, e.g. "150 words, 892 chars".
    pub fn format_compact(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.words,
            if self.words == 1 { "word" } else { "words" },
            self.characters,
            if self.characters == 1 { "char" } else { "chars" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_empty_text() {
        let stats = TextStats::from_text("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_stats_simple_sentence() {
        let stats = TextStats::from_text("Hello, World!");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.characters, 13);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_stats_multiple_lines_and_blank_runs() {
        let stats = TextStats::from_text("one  two\n\n\tthree\n");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 4);
    }

    #[test]
    fn test_stats_unicode_counts_chars() {
        let stats = TextStats::from_text("café über");
        assert_eq!(stats.characters, 9);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(TextStats::from_text("").format_compact(), "0 words, 0 chars");
        assert_eq!(TextStats::from_text("a").format_compact(), "1 word, 1 char");
        assert_eq!(
            TextStats::from_text("two words").format_compact(),
            "2 words, 9 chars"
        );
    }
}
