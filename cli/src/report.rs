//! Running one intent for the console: spoken lines on `out`, or a JSON
//! report with `--json`.

use anyhow::Result;
use howthings_hardware::SystemProbe;
use howthings_skill::{HowAreThingsSkill, SkillIntent, TranscriptSpeaker};
use serde_json::{json, Value};
use std::io::Write;
use tracing::debug;

use crate::speaker::ConsoleSpeaker;

/// JSON report for `intent`. The health check carries its snapshot; the
/// small-talk intents carry only what was said.
pub fn json_report<P: SystemProbe>(skill: &HowAreThingsSkill<P>, intent: SkillIntent) -> Result<Value> {
    let mut transcript = TranscriptSpeaker::default();

    let report = match intent {
        SkillIntent::HowAreThings => {
            let snapshot = skill.handle_how_are_things(&mut transcript)?;
            json!({
                "intent": intent.to_string(),
                "snapshot": snapshot,
                "narration": transcript.lines,
            })
        }
        SkillIntent::WhatAreYouDoing | SkillIntent::WhoDaMan => {
            skill.handle(intent, &mut transcript)?;
            json!({
                "intent": intent.to_string(),
                "narration": transcript.lines,
            })
        }
    };

    Ok(report)
}

/// Run `intent` and write the result to `out`.
pub fn run_intent<P: SystemProbe, W: Write>(
    skill: &HowAreThingsSkill<P>,
    intent: SkillIntent,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    debug!(%intent, as_json, "Handling intent");

    if as_json {
        let report = json_report(skill, intent)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        let mut speaker = ConsoleSpeaker::new(&mut *out);
        skill.handle(intent, &mut speaker)?;
    }

    Ok(())
}
