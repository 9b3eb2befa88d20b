//! Document state for Quillpad
//!
//! `Document` is the live text buffer behind the editor widget. Besides the
//! text itself it keeps the undo/redo history for the Edit menu, the caret
//! and selection last reported by the widget, and a `modified` flag used for
//! the window title and status bar.

use log::debug;

/// Maximum number of undo snapshots kept per document.
const MAX_UNDO_SIZE: usize = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Text Buffer Contract
// ─────────────────────────────────────────────────────────────────────────────

/// The buffer surface the session controller works against.
pub trait TextBuffer {
    /// Current full text.
    fn content(&self) -> String;

    /// Replace the whole text (e.g. after loading a file).
    fn set_content(&mut self, content: String);

    /// Empty the buffer.
    fn clear(&mut self);

    /// Whether the text changed since the last load, save or clear.
    fn is_modified(&self) -> bool;

    /// Record that the current text now matches what is persisted.
    fn mark_clean(&mut self);
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// The text being edited.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document content, edited in place by the text widget
    pub content: String,
    /// Whether there were edits since the last load/save/clear
    modified: bool,
    /// Undo history stack
    undo_stack: Vec<String>,
    /// Redo history stack
    redo_stack: Vec<String>,
    /// Incremented whenever content is replaced from outside the widget
    content_version: u64,
    /// Cursor position (line, column) - 0-indexed
    pub cursor_position: (usize, usize),
    /// Cursor as a character index into `content`
    pub cursor_index: usize,
    /// Selected character range (start, end) - None if nothing is selected
    pub selection: Option<(usize, usize)>,
    /// Selection the widget should apply on its next frame
    pending_selection: Option<(usize, usize)>,
    /// Whether the editor should request focus on next frame
    pub needs_focus: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            content: String::new(),
            modified: false,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            content_version: 0,
            cursor_position: (0, 0),
            cursor_index: 0,
            selection: None,
            pending_selection: None,
            needs_focus: true,
        }
    }

    /// Get the content version counter.
    ///
    /// Widgets include this in their id so they re-read the text after it
    /// was replaced externally (load, undo, cut, paste).
    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    fn bump_version(&mut self) {
        self.content_version = self.content_version.wrapping_add(1);
    }

    fn push_undo(&mut self, snapshot: String) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > MAX_UNDO_SIZE {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Record an edit made directly by the text widget.
    ///
    /// Call this AFTER the widget modified `content`, passing the text as it
    /// was before.
    pub fn record_edit(&mut self, old_content: String) {
        if old_content != self.content {
            self.push_undo(old_content);
            self.modified = true;
        }
    }

    /// Undo the last edit. Returns `true` if anything changed.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.content, previous);
                self.redo_stack.push(current);
                self.after_external_change();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit. Returns `true` if anything changed.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.content, next);
                self.undo_stack.push(current);
                self.after_external_change();
                true
            }
            None => false,
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn after_external_change(&mut self) {
        self.modified = true;
        self.bump_version();
        let len = self.char_count();
        self.cursor_index = self.cursor_index.min(len);
        self.selection = None;
        self.pending_selection = Some((self.cursor_index, self.cursor_index));
    }

    /// Number of characters in the document.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Text inside the current selection, if any.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection?;
        if start == end {
            return None;
        }
        Some(self.content.chars().skip(start).take(end - start).collect())
    }

    /// Replace the selection (or insert at the cursor) with `text`.
    ///
    /// The edit is recorded for undo and the cursor lands after the inserted
    /// text.
    pub fn replace_selection(&mut self, text: &str) {
        let len = self.char_count();
        let (start, end) = self
            .selection
            .unwrap_or((self.cursor_index, self.cursor_index));
        let (start, end) = (start.min(len), end.min(len));

        let byte_start = char_to_byte(&self.content, start);
        let byte_end = char_to_byte(&self.content, end);

        let old = self.content.clone();
        self.content.replace_range(byte_start..byte_end, text);
        self.record_edit(old);

        let caret = start + text.chars().count();
        self.bump_version();
        self.cursor_index = caret;
        self.selection = None;
        self.pending_selection = Some((caret, caret));
        debug!("Replaced chars {}..{} with {} chars", start, end, text.len());
    }

    /// Select the whole document on the next frame.
    pub fn select_all(&mut self) {
        let len = self.char_count();
        self.selection = Some((0, len));
        self.pending_selection = Some((0, len));
    }

    /// Take the selection the widget should apply, clearing the request.
    pub fn take_pending_selection(&mut self) -> Option<(usize, usize)> {
        self.pending_selection.take()
    }
}

impl TextBuffer for Document {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, content: String) {
        self.content = content;
        self.modified = false;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.cursor_index = 0;
        self.cursor_position = (0, 0);
        self.selection = None;
        self.pending_selection = Some((0, 0));
        self.needs_focus = true;
        self.bump_version();
    }

    fn clear(&mut self) {
        self.set_content(String::new());
    }

    fn is_modified(&self) -> bool {
        self.modified
    }

    fn mark_clean(&mut self) {
        self.modified = false;
    }
}

/// Convert a character index into a byte offset, clamped to the text length.
fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edited(doc: &mut Document, new_content: &str) {
        let old = std::mem::replace(&mut doc.content, new_content.to_string());
        doc.record_edit(old);
    }

    #[test]
    fn test_new_document_is_empty_and_clean() {
        let doc = Document::new();
        assert!(doc.content.is_empty());
        assert!(!doc.is_modified());
        assert!(!doc.can_undo());
        assert!(doc.needs_focus);
    }

    #[test]
    fn test_record_edit_marks_modified() {
        let mut doc = Document::new();
        edited(&mut doc, "hello");
        assert!(doc.is_modified());
        assert!(doc.can_undo());
    }

    #[test]
    fn test_record_edit_without_change_is_ignored() {
        let mut doc = Document::new();
        doc.set_content("same".to_string());
        doc.record_edit("same".to_string());
        assert!(!doc.is_modified());
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_set_content_resets_history_and_flag() {
        let mut doc = Document::new();
        edited(&mut doc, "draft");
        let version = doc.content_version();

        doc.set_content("loaded".to_string());
        assert_eq!(doc.content(), "loaded");
        assert!(!doc.is_modified());
        assert!(!doc.can_undo());
        assert!(doc.content_version() > version);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut doc = Document::new();
        edited(&mut doc, "something");
        doc.clear();
        assert_eq!(doc.content(), "");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_mark_clean_keeps_content() {
        let mut doc = Document::new();
        edited(&mut doc, "keep me");
        doc.mark_clean();
        assert_eq!(doc.content(), "keep me");
        assert!(!doc.is_modified());
        assert!(doc.can_undo());
    }

    #[test]
    fn test_undo_redo() {
        let mut doc = Document::new();
        edited(&mut doc, "one");
        edited(&mut doc, "one two");

        assert!(doc.undo());
        assert_eq!(doc.content, "one");
        assert!(doc.can_redo());

        assert!(doc.redo());
        assert_eq!(doc.content, "one two");
        assert!(!doc.redo());
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut doc = Document::new();
        let version = doc.content_version();
        assert!(!doc.undo());
        assert_eq!(doc.content_version(), version);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut doc = Document::new();
        edited(&mut doc, "a");
        edited(&mut doc, "ab");
        doc.undo();
        edited(&mut doc, "ac");
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_undo_history_is_bounded() {
        let mut doc = Document::new();
        for i in 0..(MAX_UNDO_SIZE + 20) {
            edited(&mut doc, &i.to_string());
        }
        let mut undone = 0;
        while doc.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_UNDO_SIZE);
    }

    #[test]
    fn test_selected_text_uses_char_indices() {
        let mut doc = Document::new();
        doc.set_content("añob€c".to_string());
        doc.selection = Some((1, 5));
        assert_eq!(doc.selected_text(), Some("ñob€".to_string()));

        doc.selection = Some((2, 2));
        assert_eq!(doc.selected_text(), None);
    }

    #[test]
    fn test_replace_selection_cuts_and_moves_caret() {
        let mut doc = Document::new();
        doc.set_content("hello cruel world".to_string());
        doc.selection = Some((5, 11));

        doc.replace_selection("");
        assert_eq!(doc.content, "hello world");
        assert_eq!(doc.cursor_index, 5);
        assert!(doc.selection.is_none());
        assert!(doc.is_modified());
        assert_eq!(doc.take_pending_selection(), Some((5, 5)));

        assert!(doc.undo());
        assert_eq!(doc.content, "hello cruel world");
    }

    #[test]
    fn test_replace_selection_inserts_at_cursor() {
        let mut doc = Document::new();
        doc.set_content("über".to_string());
        doc.cursor_index = 1;

        doc.replace_selection("--");
        assert_eq!(doc.content, "ü--ber");
        assert_eq!(doc.cursor_index, 3);
    }

    #[test]
    fn test_replace_selection_clamps_stale_range() {
        let mut doc = Document::new();
        doc.set_content("abc".to_string());
        doc.selection = Some((2, 40));

        doc.replace_selection("Z");
        assert_eq!(doc.content, "abZ");
    }

    #[test]
    fn test_select_all() {
        let mut doc = Document::new();
        doc.set_content("twelve chars".to_string());
        doc.take_pending_selection();

        doc.select_all();
        assert_eq!(doc.selection, Some((0, 12)));
        assert_eq!(doc.take_pending_selection(), Some((0, 12)));
        assert_eq!(doc.take_pending_selection(), None);
    }

    #[test]
    fn test_char_to_byte() {
        assert_eq!(char_to_byte("añb", 0), 0);
        assert_eq!(char_to_byte("añb", 2), 3);
        assert_eq!(char_to_byte("añb", 3), 4);
        assert_eq!(char_to_byte("añb", 99), 4);
    }
}
