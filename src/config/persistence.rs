//! Configuration file persistence for Quillpad
//!
//! Settings live in a JSON file inside the platform config directory.
//! Loading never fails from the caller's point of view: a missing, empty or
//! corrupted file yields defaults and a log line.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "quillpad";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Temporary file used for the write-then-rename save
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\quillpad\`
/// - **macOS**: `~/Library/Application Support/quillpad/`
/// - **Linux**: `~/.config/quillpad/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the base directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from the default config file location.
///
/// Falls back to `Settings::default()` on any failure.
pub fn load_config() -> Settings {
    get_config_dir()
        .and_then(|dir| load_config_from(&dir))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load configuration from `config.json` inside `config_dir`.
///
/// A missing or blank file is not an error and yields defaults.
pub fn load_config_from(config_dir: &Path) -> Result<Settings> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::from(e)
    })?;

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save configuration into `config_dir`, creating it if necessary.
///
/// Writes to a temporary file first and renames it over the real one so a
/// crash mid-write never leaves a truncated config behind.
pub fn save_config_to(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(config_dir).map_err(|e| Error::ConfigSave {
            path: config_dir.to_path_buf(),
            source: Box::new(e),
        })?;
    }

    let config_path = config_dir.join(CONFIG_FILE_NAME);
    let backup_path = config_dir.join(CONFIG_BACKUP_NAME);

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &config_path).map_err(|e| Error::ConfigSave {
        path: config_path.clone(),
        source: Box::new(e),
    })?;

    info!("Configuration saved to {}", config_path.display());
    Ok(())
}

/// Save configuration to the default location, ignoring errors.
///
/// Returns `true` if the save was successful.
pub fn save_config_silent(settings: &Settings) -> bool {
    match get_config_dir().and_then(|dir| save_config_to(&dir, settings)) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use tempfile::TempDir;

    fn config_file(dir: &TempDir) -> PathBuf {
        dir.path().join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_get_config_dir_ends_with_app_name() {
        if let Ok(path) = get_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(config_file(&dir), "   \n").unwrap();

        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupted_config_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(config_file(&dir), "{ invalid json }").unwrap();

        let result = load_config_from(dir.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_corrupted_config_falls_back_with_result_ext() {
        let dir = TempDir::new().unwrap();
        fs::write(config_file(&dir), "not json at all").unwrap();

        let settings = load_config_from(dir.path())
            .unwrap_or_warn_default(Settings::default(), "test");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_sanitizes_values() {
        let dir = TempDir::new().unwrap();
        fs::write(config_file(&dir), r#"{"font_size": 500.0}"#).unwrap();

        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings.font_size, Settings::MAX_FONT_SIZE);
    }

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join(APP_NAME);

        let mut original = Settings {
            theme: Theme::Dark,
            word_wrap: false,
            ..Settings::default()
        };
        original.add_recent_file(PathBuf::from("/tmp/notes.txt"));

        save_config_to(&nested, &original).unwrap();
        assert!(nested.join(CONFIG_FILE_NAME).exists());
        assert!(!nested.join(CONFIG_BACKUP_NAME).exists());

        let loaded = load_config_from(&nested).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(
            config_file(&dir),
            r#"{"theme": "dark", "future_feature": true}"#,
        )
        .unwrap();

        let settings = load_config_from(dir.path()).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
    }
}
