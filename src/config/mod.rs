//! Configuration module for Quillpad
//!
//! This module handles user preferences and application settings,
//! including serialization to JSON and persistent storage in the
//! platform-specific config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
