//! System clipboard access for the Edit menu
//!
//! Keyboard shortcuts for cut/copy/paste are handled by the text widget
//! itself; the menu entries go through arboard instead, since clicking a menu
//! takes focus away from the editor.

#![allow(clippy::enum_variant_names)]

use arboard::Clipboard;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access clipboard
    AccessError(String),
    /// Failed to set clipboard content
    WriteError(String),
    /// Failed to read clipboard content (empty or not text)
    ReadError(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::AccessError(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::WriteError(msg) => write!(f, "Clipboard write error: {}", msg),
            ClipboardError::ReadError(msg) => write!(f, "Clipboard read error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ─────────────────────────────────────────────────────────────────────────────
// System Clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// Lazily opened handle to the system clipboard.
///
/// The handle is kept for the lifetime of the app: on X11 the copied text is
/// served by the process that owns it and vanishes when the handle drops.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::AccessError("clipboard unavailable".to_string()))
    }

    /// Put plain text on the clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteError(e.to_string()))
    }

    /// Read plain text from the clipboard.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.handle()?
            .get_text()
            .map_err(|e| ClipboardError::ReadError(e.to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::AccessError("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard access error: no display");
    }

    #[test]
    fn test_clipboard_error_read() {
        let err = ClipboardError::ReadError("empty".to_string());
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_clipboard_opens_lazily() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.inner.is_none());
        assert!(format!("{:?}", clipboard).contains("open: false"));
    }
}
