//! File operations module for Quillpad
//!
//! Reading and writing documents, and the native dialogs used to pick
//! paths and confirm destructive actions.

pub mod dialogs;
pub mod io;

pub use dialogs::{Confirmation, Dialogs, NativeDialogs};
pub use io::{with_default_extension, DiskStore, FileStore};
