//! Configuration for the `howthings` command.
//!
//! Priority: CLI args > Environment > Settings file > Defaults

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use common::LogLevel;
use howthings_skill::{HealthConfig, SkillIntent};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line arguments for the health-check host.
#[derive(Parser, Debug, Clone)]
#[command(name = "howthings")]
#[command(about = "Ask the machine how things are: network, utilization, temperature and throttling")]
#[command(version)]
pub struct CliArgs {
    /// Which intent to trigger
    #[arg(value_enum, default_value = "how-are-things")]
    pub intent: IntentArg,

    /// Settings file (defaults to the platform configuration directory)
    #[arg(long, short = 'c', env = "HOWTHINGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Name used in the canned replies
    #[arg(long, env = "HOWTHINGS_NAME")]
    pub name: Option<String>,

    /// Utilization ceiling in percent for CPU, memory and disk
    #[arg(long, short = 't', env = "HOWTHINGS_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Host used for the reachability probe
    #[arg(long, env = "HOWTHINGS_NET_HOST")]
    pub host: Option<String>,

    /// Log level (DEBUG, INFO, WARNING, ERROR); RUST_LOG wins when set
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print a JSON report instead of speaking (the snapshot is included for the health check)
    #[arg(long)]
    pub json: bool,

    /// Write a settings file with the default values if none exists
    #[arg(long)]
    pub write_default_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntentArg {
    HowAreThings,
    WhatAreYouDoing,
    WhoDaMan,
}

impl From<IntentArg> for SkillIntent {
    fn from(arg: IntentArg) -> Self {
        match arg {
            IntentArg::HowAreThings => SkillIntent::HowAreThings,
            IntentArg::WhatAreYouDoing => SkillIntent::WhatAreYouDoing,
            IntentArg::WhoDaMan => SkillIntent::WhoDaMan,
        }
    }
}

impl CliArgs {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(common::platform::get_default_config_path)
    }

    /// Level used before the settings file is read.
    pub fn startup_log_level(&self) -> LogLevel {
        self.log_level
            .as_deref()
            .map(LogLevel::from)
            .unwrap_or_default()
    }
}

/// Write the default settings first if asked to, then load them.
pub fn prepare_config(args: &CliArgs, path: &Path) -> Result<HealthConfig> {
    if args.write_default_config {
        write_default_config(path)?;
    }
    load_config(args, path)
}

/// Load settings from `path` and apply the CLI overrides.
pub fn load_config(args: &CliArgs, path: &Path) -> Result<HealthConfig> {
    let mut config = HealthConfig::load(path)
        .with_context(|| format!("Failed to load settings from {:?}", path))?;

    if let Some(ref name) = args.name {
        config.display_name = name.clone();
    }
    if let Some(threshold) = args.threshold {
        config.usage_threshold_percent = threshold;
    }
    if let Some(ref host) = args.host {
        config.network_probe_host = host.clone();
    }
    if let Some(ref level) = args.log_level {
        config.log_level = level.as_str().into();
    }

    config.validate().context("Invalid settings after CLI overrides")?;
    Ok(config)
}

/// Create `path` with the default settings unless it already exists.
///
/// Returns whether a file was written.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        info!(path = %path.display(), "Settings file already exists, leaving it untouched");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        common::platform::ensure_config_directory(parent)
            .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
    }
    let contents = HealthConfig::default().to_toml_string()?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write settings file {:?}", path))?;

    info!(path = %path.display(), "Default settings written");
    Ok(true)
}
