//! Common types and utilities shared across the HowAreThings crates.
//!
//! This crate provides foundational types that are used by the probe,
//! skill and CLI crates of the workspace.
//!
//! # Architecture
//!
//! The `common` crate sits at the bottom of the dependency hierarchy:
//! - Has NO dependencies on other workspace crates
//! - Provides the diagnostic log level shared by configuration and logging setup
//! - Knows where settings live on each platform

pub mod logging;
pub mod platform;

pub use logging::LogLevel;

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "HowAreThings";

/// File name of the skill settings inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_is_toml() {
        assert!(SETTINGS_FILE_NAME.ends_with(".toml"));
        assert!(!APP_DIR_NAME.is_empty());
    }
}
