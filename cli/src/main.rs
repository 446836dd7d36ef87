//! `howthings` - asks the machine how things are.
//!
//! Plays the part of the voice-assistant host: loads the settings, wires the
//! requested intent to the skill and prints the narration on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use howthings_skill::{HowAreThingsSkill, SkillIntent};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod speaker;

use crate::config::{prepare_config, CliArgs};
use crate::report::run_intent;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG takes precedence over --log-level and the settings file.
    // Without it the filter starts at --log-level and switches to the
    // configured level once the settings are loaded.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let follows_settings = env_filter.is_none();
    let startup_filter =
        env_filter.unwrap_or_else(|| EnvFilter::new(args.startup_log_level().as_directive()));
    let (filter, filter_handle) = reload::Layer::new(startup_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting howthings v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args.config_path();
    let config = prepare_config(&args, &config_path)?;

    if follows_settings {
        filter_handle
            .reload(EnvFilter::new(config.log_level.as_directive()))
            .context("Failed to apply the configured log level")?;
    }
    debug!(path = %config_path.display(), ?config, "Settings loaded");

    let intent = SkillIntent::from(args.intent);
    let skill = HowAreThingsSkill::with_host_probe(config);
    run_intent(&skill, intent, args.json, &mut std::io::stdout().lock())?;

    Ok(())
}
