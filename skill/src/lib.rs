//! How Are Things skill.
//!
//! Answers "how are things?" with a one-shot health snapshot of the host:
//! network reachability, CPU/memory/disk utilization, core temperature and
//! throttling history. Results are narrated line by line through a
//! [`Speaker`]. Two small-talk intents answer with canned phrases.
//!
//! The host assistant owns intent recognition, settings storage and speech
//! synthesis. It constructs a [`HowAreThingsSkill`] with a [`HealthConfig`]
//! and a probe, then routes recognised intents to [`HowAreThingsSkill::handle`].
//!
//! # Example
//!
//! ```no_run
//! use howthings_skill::{HealthConfig, HowAreThingsSkill, SkillIntent, TranscriptSpeaker};
//!
//! # fn main() -> howthings_skill::Result<()> {
//! let skill = HowAreThingsSkill::with_host_probe(HealthConfig::default());
//! let mut speaker = TranscriptSpeaker::default();
//! skill.handle(SkillIntent::HowAreThings, &mut speaker)?;
//! for line in &speaker.lines {
//!     println!("{}", line.text);
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod config;
pub mod dialog;
pub mod intent;
pub mod narration;
pub mod skill;
pub mod snapshot;
pub mod verdict;

pub use config::HealthConfig;
pub use dialog::Dialog;
pub use intent::SkillIntent;
pub use narration::{narrate, NarrationLine, Speaker, TranscriptSpeaker};
pub use skill::{HowAreThingsSkill, RuntimeRequirements};
pub use snapshot::HealthSnapshot;
pub use verdict::{FailureReason, Signal, Verdict, TEMPERATURE_LIMIT_CELSIUS};

#[derive(Debug, Error)]
pub enum SkillError {
    /// A probe that must not fail did (utilization counters).
    #[error("Health probe failed: {0}")]
    Probe(#[from] howthings_hardware::HardwareError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read settings file {path}: {source}")]
    ConfigFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Speech output failed: {0}")]
    Speech(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
}

pub type Result<T> = std::result::Result<T, SkillError>;
