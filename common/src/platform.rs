//! Platform-specific utilities for settings paths.
//!
//! Provides cross-platform functions to determine where the skill settings
//! live on Windows, macOS, and Linux.

use std::path::{Path, PathBuf};

use crate::{APP_DIR_NAME, SETTINGS_FILE_NAME};

/// Get the default settings directory for the current platform.
///
/// Returns platform-specific paths:
/// - **Windows**: `%APPDATA%\HowAreThings\`
/// - **macOS**: `~/Library/Application Support/HowAreThings/`
/// - **Linux**: `$XDG_CONFIG_HOME/HowAreThings/` or `~/.config/HowAreThings/`
///
/// # Examples
///
/// ```
/// use common::platform::get_default_config_dir;
///
/// let dir = get_default_config_dir();
/// println!("Settings will be read from: {:?}", dir);
/// ```
pub fn get_default_config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        // Last resort fallback
        None => PathBuf::from(".").join(APP_DIR_NAME),
    }
}

/// Get the default settings file path.
pub fn get_default_config_path() -> PathBuf {
    get_default_config_dir().join(SETTINGS_FILE_NAME)
}

/// Ensure the settings directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_config_directory(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
