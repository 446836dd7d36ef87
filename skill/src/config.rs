//! Skill settings.
//!
//! Settings come from the host as a TOML document keyed the way the assistant
//! stores skill settings (`my_name`, `usage_threshold`, `net_testsite`,
//! `log_level`). Every absent key takes its default, so a partial file only
//! overrides what it names.

use common::LogLevel;
use howthings_hardware::constants::{DEFAULT_NETWORK_HOST, DEFAULT_NETWORK_PORT, DEFAULT_NETWORK_TIMEOUT_MS};
use howthings_hardware::NetworkTarget;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::{Result, SkillError};

pub const DEFAULT_DISPLAY_NAME: &str = "Papa";
pub const DEFAULT_USAGE_THRESHOLD_PERCENT: f64 = 90.0;

/// Immutable for the lifetime of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Name used in the canned phrase templates.
    #[serde(rename = "my_name")]
    pub display_name: String,

    /// Ceiling for CPU, memory and disk utilization (0-100).
    #[serde(rename = "usage_threshold")]
    pub usage_threshold_percent: f64,

    #[serde(rename = "net_testsite")]
    pub network_probe_host: String,

    #[serde(rename = "net_port")]
    pub network_probe_port: u16,

    #[serde(rename = "net_timeout_ms")]
    pub network_timeout_ms: u64,

    pub log_level: LogLevel,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            usage_threshold_percent: DEFAULT_USAGE_THRESHOLD_PERCENT,
            network_probe_host: DEFAULT_NETWORK_HOST.to_string(),
            network_probe_port: DEFAULT_NETWORK_PORT,
            network_timeout_ms: DEFAULT_NETWORK_TIMEOUT_MS,
            log_level: LogLevel::Warn,
        }
    }
}

impl HealthConfig {
    /// Load settings from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| SkillError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), ?config, "Settings loaded");
        Ok(config)
    }

    /// Parse and validate a TOML settings document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: HealthConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.usage_threshold_percent) {
            return Err(SkillError::Config(format!(
                "usage_threshold must be between 0 and 100, got {}",
                self.usage_threshold_percent
            )));
        }
        if self.network_probe_host.trim().is_empty() {
            return Err(SkillError::Config("net_testsite must not be empty".to_string()));
        }
        if self.network_timeout_ms == 0 {
            return Err(SkillError::Config("net_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn network_target(&self) -> NetworkTarget {
        NetworkTarget::new(
            self.network_probe_host.clone(),
            self.network_probe_port,
            Duration::from_millis(self.network_timeout_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HealthConfig::default();
        assert_eq!(config.display_name, "Papa");
        assert_eq!(config.usage_threshold_percent, 90.0);
        assert_eq!(config.network_probe_host, "www.ibm.com");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let config = HealthConfig::from_toml_str("my_name = \"Ada\"\nusage_threshold = 75\n").unwrap();
        assert_eq!(config.display_name, "Ada");
        assert_eq!(config.usage_threshold_percent, 75.0);
        assert_eq!(config.network_probe_host, "www.ibm.com");
        assert_eq!(config.network_probe_port, 80);
    }

    #[test]
    fn test_python_style_log_level() {
        let config = HealthConfig::from_toml_str("log_level = \"INFO\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = HealthConfig::from_toml_str("usage_threshold = 140").unwrap_err();
        assert!(matches!(err, SkillError::Config(_)));
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = HealthConfig::from_toml_str("net_testsite = \"  \"").unwrap_err();
        assert!(matches!(err, SkillError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = HealthConfig::from_toml_str("usage_threshold = = 3").unwrap_err();
        assert!(matches!(err, SkillError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HealthConfig::load(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(config, HealthConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "net_testsite = \"example.org\"\nnet_timeout_ms = 500\n").unwrap();

        let config = HealthConfig::load(&path).unwrap();
        let target = config.network_target();
        assert_eq!(target.host, "example.org");
        assert_eq!(target.port, 80);
        assert_eq!(target.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_toml_round_trip_uses_setting_keys() {
        let text = HealthConfig::default().to_toml_string().unwrap();
        assert!(text.contains("my_name = \"Papa\""));
        assert!(text.contains("log_level = \"WARNING\""));
        assert_eq!(HealthConfig::from_toml_str(&text).unwrap(), HealthConfig::default());
    }
}
