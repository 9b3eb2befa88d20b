//! Editing session controller
//!
//! `Session` owns the identity of the file being edited and gates every
//! action that could throw away unsaved text behind [`Session::confirm_discard`].
//! It talks to the outside world only through its three collaborators: the
//! text buffer, the file store and the dialog surface.
//!
//! The presentation layer never inspects the session's internals to decide
//! what to show; it drains [`SessionEvent`]s after each call instead.

use crate::error::{Error, Result};
use crate::files::{with_default_extension, Confirmation, Dialogs, FileStore};
use crate::state::TextBuffer;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Extension applied by Save As when the chosen name has none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// File name suggested by Save As for a document that was never saved.
const UNTITLED_FILE_NAME: &str = "untitled.txt";

/// Display name of a document that was never saved.
pub const UNTITLED: &str = "Untitled";

/// Title of the save/discard/cancel prompt.
const UNSAVED_CHANGES_TITLE: &str = "Unsaved Changes";

// ─────────────────────────────────────────────────────────────────────────────
// Events and Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// State changes the presentation layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The buffer was emptied and the path forgotten (File > New)
    Cleared,
    /// A file was loaded into the buffer
    Opened(PathBuf),
    /// Loading a file failed; the session is unchanged
    OpenFailed(PathBuf),
    /// The buffer was written to this path
    Saved(PathBuf),
    /// The user confirmed leaving the application
    ExitRequested,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content is on disk at this path
    Saved(PathBuf),
    /// The user dismissed the save dialog
    Cancelled,
    /// Writing failed; the user has been shown the error
    Failed,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// The editing session: one buffer, at most one file behind it.
#[derive(Debug)]
pub struct Session<B, F, D> {
    buffer: B,
    files: F,
    dialogs: D,
    /// File last read from or written to successfully; `None` for untitled
    current_path: Option<PathBuf>,
    /// Directory the pickers start in while no file is open
    initial_dir: Option<PathBuf>,
    exit_requested: bool,
    events: Vec<SessionEvent>,
}

impl<B: TextBuffer, F: FileStore, D: Dialogs> Session<B, F, D> {
    /// Start an untitled session around `buffer`.
    pub fn new(buffer: B, files: F, dialogs: D) -> Self {
        Self {
            buffer,
            files,
            dialogs,
            current_path: None,
            initial_dir: None,
            exit_requested: false,
            events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Path of the file being edited, if it was ever opened or saved.
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// File name shown in the title bar and prompts.
    pub fn display_name(&self) -> String {
        self.current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    /// Directory file pickers start in when no file is open.
    pub fn set_initial_dir(&mut self, dir: Option<PathBuf>) {
        self.initial_dir = dir;
    }

    /// Whether the user confirmed leaving the application.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn picker_dir(&self) -> Option<PathBuf> {
        self.current_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .or_else(|| self.initial_dir.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dirty Detection
    // ─────────────────────────────────────────────────────────────────────────

    /// What the buffer is compared against: the file on disk right now, or
    /// the empty string for an untitled session.
    fn reference_content(&self) -> Result<String> {
        match &self.current_path {
            None => Ok(String::new()),
            Some(path) => self.files.read(path).map_err(|e| Error::FileRead {
                path: path.clone(),
                source: e,
            }),
        }
    }

    /// Whether the buffer differs from what is persisted.
    ///
    /// Always reads the file fresh; nothing about the disk state is cached.
    pub fn is_dirty(&self) -> Result<bool> {
        Ok(self.buffer.content() != self.reference_content()?)
    }

    /// Ask the user what to do with unsaved changes before a destructive
    /// action.
    ///
    /// Returns `true` when the caller may go ahead: nothing would be lost,
    /// the user chose to discard, or the user chose to save and the save
    /// went through. A cancelled or failed save keeps the caller from
    /// proceeding.
    pub fn confirm_discard(&mut self) -> bool {
        let dirty = match self.is_dirty() {
            Ok(dirty) => dirty,
            Err(e) => {
                // The saved copy can't vouch for the buffer, so ask.
                warn!("Could not compare with saved copy: {}", e);
                true
            }
        };

        if !dirty {
            return true;
        }

        let message = format!(
            "Do you want to save the changes to {}?\n\nYour changes will be lost if you don't save them.",
            self.display_name()
        );

        match self
            .dialogs
            .confirm_yes_no_cancel(UNSAVED_CHANGES_TITLE, &message)
        {
            Confirmation::Cancel => {
                debug!("Destructive action cancelled by user");
                false
            }
            Confirmation::No => {
                debug!("Discarding unsaved changes");
                true
            }
            Confirmation::Yes => match self.save() {
                SaveOutcome::Saved(_) => true,
                outcome => {
                    debug!("Save before discard did not complete: {:?}", outcome);
                    false
                }
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // File Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// File > New. Returns `true` if the buffer was reset.
    pub fn new_file(&mut self) -> bool {
        if !self.confirm_discard() {
            return false;
        }

        self.buffer.clear();
        self.current_path = None;
        self.events.push(SessionEvent::Cleared);
        info!("Started new document");
        true
    }

    /// File > Open. Returns `true` if a file was loaded.
    pub fn open(&mut self) -> bool {
        if !self.confirm_discard() {
            return false;
        }

        let initial_dir = self.picker_dir();
        match self.dialogs.pick_open_path(initial_dir.as_deref()) {
            Some(path) => self.load(path),
            None => {
                debug!("Open dialog cancelled");
                false
            }
        }
    }

    /// Open a known path (File > Open Recent). Returns `true` if it was loaded.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        if !self.confirm_discard() {
            return false;
        }
        self.load(path)
    }

    fn load(&mut self, path: PathBuf) -> bool {
        info!("Opening file: {}", path.display());
        match self.files.read(&path) {
            Ok(content) => {
                self.buffer.set_content(content);
                self.current_path = Some(path.clone());
                self.events.push(SessionEvent::Opened(path));
                true
            }
            Err(e) => {
                let err = Error::FileRead {
                    path: path.clone(),
                    source: e,
                };
                warn!("Failed to open file: {}", err);
                self.dialogs
                    .alert_error(&format!("Failed to open file:\n{}", err));
                self.events.push(SessionEvent::OpenFailed(path));
                false
            }
        }
    }

    /// File > Save. Falls back to Save As for an untitled document.
    pub fn save(&mut self) -> SaveOutcome {
        let path = match &self.current_path {
            Some(path) => path.clone(),
            None => return self.save_as(),
        };

        self.write_to(path)
    }

    /// File > Save As. The session only adopts the new path once the write
    /// succeeded.
    pub fn save_as(&mut self) -> SaveOutcome {
        let initial_dir = self.picker_dir();
        let default_name = self
            .current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_FILE_NAME.to_string());

        let chosen = self.dialogs.pick_save_path(
            initial_dir.as_deref(),
            &default_name,
            DEFAULT_EXTENSION,
        );

        match chosen {
            Some(path) => {
                let path = with_default_extension(&path, DEFAULT_EXTENSION);
                self.write_to(path)
            }
            None => {
                debug!("Save dialog cancelled");
                SaveOutcome::Cancelled
            }
        }
    }

    fn write_to(&mut self, path: PathBuf) -> SaveOutcome {
        let content = self.buffer.content();
        match self.files.write(&path, &content) {
            Ok(()) => {
                self.buffer.mark_clean();
                self.current_path = Some(path.clone());
                info!("Saved file: {}", path.display());
                self.events.push(SessionEvent::Saved(path.clone()));
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                let err = Error::FileWrite {
                    path: path.clone(),
                    source: e,
                };
                warn!("Failed to save file: {}", err);
                self.dialogs
                    .alert_error(&format!("Failed to save file:\n{}", err));
                SaveOutcome::Failed
            }
        }
    }

    /// File > Exit (and the window close button). Returns `true` if the
    /// application should close.
    pub fn exit(&mut self) -> bool {
        if !self.confirm_discard() {
            return false;
        }

        self.exit_requested = true;
        self.events.push(SessionEvent::ExitRequested);
        info!("Exit confirmed");
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
