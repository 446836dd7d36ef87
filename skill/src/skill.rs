//! Skill entry points wired to the host's intent dispatch.

use howthings_hardware::{HostProbe, SystemProbe};
use serde::Serialize;
use tracing::{debug, info};

use crate::narration::{narrate, NarrationLine, Speaker, INTRO};
use crate::{Dialog, HealthConfig, HealthSnapshot, Result, SkillIntent};

/// What the skill needs from the host before and while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeRequirements {
    pub internet_before_load: bool,
    pub network_before_load: bool,
    pub gui_before_load: bool,
    pub requires_internet: bool,
    pub requires_network: bool,
    pub requires_gui: bool,
    pub no_internet_fallback: bool,
    pub no_network_fallback: bool,
    pub no_gui_fallback: bool,
}

/// Reporting a dead network is part of the job, so nothing is required.
impl Default for RuntimeRequirements {
    fn default() -> Self {
        Self {
            internet_before_load: false,
            network_before_load: false,
            gui_before_load: false,
            requires_internet: false,
            requires_network: false,
            requires_gui: false,
            no_internet_fallback: true,
            no_network_fallback: true,
            no_gui_fallback: true,
        }
    }
}

pub struct HowAreThingsSkill<P = HostProbe> {
    config: HealthConfig,
    probe: P,
}

impl HowAreThingsSkill<HostProbe> {
    pub fn with_host_probe(config: HealthConfig) -> Self {
        Self::new(config, HostProbe::default())
    }
}

impl<P: SystemProbe> HowAreThingsSkill<P> {
    pub fn new(config: HealthConfig, probe: P) -> Self {
        Self { config, probe }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn runtime_requirements() -> RuntimeRequirements {
        RuntimeRequirements::default()
    }

    /// Route a recognised intent to its handler.
    pub fn handle(&self, intent: SkillIntent, speaker: &mut dyn Speaker) -> Result<()> {
        debug!(%intent, "Handling intent");
        match intent {
            SkillIntent::HowAreThings => self.handle_how_are_things(speaker).map(|_| ()),
            SkillIntent::WhatAreYouDoing => self.handle_what_are_you_doing(speaker),
            SkillIntent::WhoDaMan => self.handle_who_da_man(speaker),
        }
    }

    /// Announce, capture a fresh snapshot, then narrate it.
    ///
    /// If a utilization counter fails the error is returned after the intro
    /// has already been spoken; nothing else is narrated.
    pub fn handle_how_are_things(&self, speaker: &mut dyn Speaker) -> Result<HealthSnapshot> {
        speaker.speak(&NarrationLine::say(INTRO))?;

        let snapshot = HealthSnapshot::capture(&self.probe, &self.config)?;
        for line in narrate(&snapshot) {
            speaker.speak(&line)?;
        }

        info!(ok = snapshot.verdict.ok, "Health check narrated");
        Ok(snapshot)
    }

    pub fn handle_what_are_you_doing(&self, speaker: &mut dyn Speaker) -> Result<()> {
        self.speak_dialog(Dialog::WhatAreYouDoing, speaker)
    }

    pub fn handle_who_da_man(&self, speaker: &mut dyn Speaker) -> Result<()> {
        self.speak_dialog(Dialog::WhoDaMan, speaker)
    }

    /// Nothing long-running to interrupt.
    pub fn stop(&self) -> bool {
        false
    }

    fn speak_dialog(&self, dialog: Dialog, speaker: &mut dyn Speaker) -> Result<()> {
        let text = dialog.render(&self.config.display_name, &mut rand::rng());
        speaker.speak(&NarrationLine::say(text))
    }
}
