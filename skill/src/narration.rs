//! Spoken output.
//!
//! The snapshot is turned into an ordered list of [`NarrationLine`]s and
//! handed to the host's [`Speaker`] one line at a time.

use howthings_hardware::{TemperatureResult, ThrottleResult};
use serde::Serialize;

use crate::{HealthSnapshot, Result, Signal};

pub const INTRO: &str = "I am checking a few things";
pub const NETWORK_OK: &str = "Network looks good!";
pub const NETWORK_DOWN: &str = "I don't seem to have network connectivity";
pub const UTILIZATION_HIGH: &str = "System Utilization seems a tad high ...";
pub const TEMPERATURE_HIGH: &str = "System Temperature seems a tad high";
pub const TEMPERATURE_UNKNOWN: &str = "I couldn't read the system temperature";
pub const THROTTLED: &str = "Throttling has occurred since last boot";
pub const THROTTLE_UNKNOWN: &str = "I couldn't check for throttling, so I'll assume it happened";
pub const NOT_THROTTLED: &str = "No sign of throttling, that's good!";
pub const SUMMARY_OK: &str = "I'm doing GREAT!";
pub const SUMMARY_NOT_OK: &str = "I've been better";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationLine {
    pub text: String,
    /// Ask the speaker to finish speaking this line before returning.
    pub wait: bool,
}

impl NarrationLine {
    pub fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wait: false,
        }
    }

    pub fn say_and_wait(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wait: true,
        }
    }
}

/// Speech output provided by the host. Output is append-only: a line that
/// was spoken stays spoken even if a later step fails.
pub trait Speaker {
    fn speak(&mut self, line: &NarrationLine) -> Result<()>;
}

/// Speaker that keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct TranscriptSpeaker {
    pub lines: Vec<NarrationLine>,
}

impl TranscriptSpeaker {
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl Speaker for TranscriptSpeaker {
    fn speak(&mut self, line: &NarrationLine) -> Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }
}

/// Narration for a captured snapshot, everything after [`INTRO`].
pub fn narrate(snapshot: &HealthSnapshot) -> Vec<NarrationLine> {
    let readings = &snapshot.readings;
    let verdict = &snapshot.verdict;
    let mut lines = Vec::new();

    lines.push(NarrationLine::say(if readings.network.reachable {
        NETWORK_OK
    } else {
        NETWORK_DOWN
    }));

    if verdict.utilization_high() {
        lines.push(NarrationLine::say(UTILIZATION_HIGH));
    }
    let util = &readings.utilization;
    lines.push(NarrationLine::say(format!("CPU Utilization is {:.1} percent", util.cpu_percent)));
    lines.push(NarrationLine::say(format!("Memory Utilization is {:.1} percent", util.mem_percent)));
    lines.push(NarrationLine::say(format!("Disk Utilization is {:.1} percent", util.disk_percent)));

    if verdict.failed(Signal::Temperature) {
        lines.push(NarrationLine::say(TEMPERATURE_HIGH));
    }
    lines.push(match readings.temperature {
        TemperatureResult::Available { celsius } => {
            NarrationLine::say(format!("System Temperature is {:.1} degrees Celsius", celsius))
        }
        TemperatureResult::Unavailable => NarrationLine::say(TEMPERATURE_UNKNOWN),
    });

    lines.push(match readings.throttle {
        ThrottleResult::NotThrottled => NarrationLine::say_and_wait(NOT_THROTTLED),
        ThrottleResult::Throttled { flags } => NarrationLine::say(throttled_line(&flags.describe())),
        ThrottleResult::Unknown => NarrationLine::say(THROTTLE_UNKNOWN),
    });

    lines.push(NarrationLine::say_and_wait(if verdict.ok {
        SUMMARY_OK
    } else {
        SUMMARY_NOT_OK
    }));

    lines
}

/// [`THROTTLED`], followed by the decoded conditions when any bit is known.
fn throttled_line(conditions: &[&str]) -> String {
    match conditions {
        [] => THROTTLED.to_string(),
        [only] => format!("{THROTTLED}: {only}"),
        [rest @ .., last] => format!("{THROTTLED}: {} and {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HealthConfig;
    use howthings_hardware::{NetworkResult, ProbeReadings, ThrottleFlags, UtilizationResult};

    fn snapshot(readings: ProbeReadings) -> HealthSnapshot {
        HealthSnapshot::from_readings(readings, &HealthConfig::default())
    }

    #[test]
    fn test_healthy_narration() {
        let lines = narrate(&snapshot(ProbeReadings {
            network: NetworkResult { reachable: true },
            utilization: UtilizationResult {
                cpu_percent: 45.0,
                mem_percent: 60.3,
                disk_percent: 70.0,
            },
            temperature: TemperatureResult::Available { celsius: 42.5 },
            throttle: ThrottleResult::NotThrottled,
        }));

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                NETWORK_OK,
                "CPU Utilization is 45.0 percent",
                "Memory Utilization is 60.3 percent",
                "Disk Utilization is 70.0 percent",
                "System Temperature is 42.5 degrees Celsius",
                NOT_THROTTLED,
                SUMMARY_OK,
            ]
        );
        assert!(lines[5].wait);
        assert!(lines[6].wait);
        assert!(!lines[0].wait);
    }

    #[test]
    fn test_unhealthy_narration() {
        let lines = narrate(&snapshot(ProbeReadings {
            network: NetworkResult { reachable: false },
            utilization: UtilizationResult {
                cpu_percent: 95.0,
                mem_percent: 50.0,
                disk_percent: 50.0,
            },
            temperature: TemperatureResult::Available { celsius: 80.0 },
            throttle: ThrottleResult::Throttled {
                flags: ThrottleFlags(0x50000),
            },
        }));

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts[0], NETWORK_DOWN);
        assert_eq!(texts[1], UTILIZATION_HIGH);
        assert_eq!(texts[5], TEMPERATURE_HIGH);
        assert_eq!(texts[6], "System Temperature is 80.0 degrees Celsius");
        assert_eq!(
            texts[7],
            "Throttling has occurred since last boot: under-voltage has occurred and throttling has occurred"
        );
        assert_eq!(lines.last(), Some(&NarrationLine::say_and_wait(SUMMARY_NOT_OK)));
    }

    #[test]
    fn test_unknown_signals_are_narrated() {
        let lines = narrate(&snapshot(ProbeReadings {
            network: NetworkResult { reachable: true },
            utilization: UtilizationResult {
                cpu_percent: 1.0,
                mem_percent: 1.0,
                disk_percent: 1.0,
            },
            temperature: TemperatureResult::Unavailable,
            throttle: ThrottleResult::Unknown,
        }));

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert!(texts.contains(&TEMPERATURE_UNKNOWN));
        assert!(texts.contains(&THROTTLE_UNKNOWN));
        assert_eq!(texts.last(), Some(&SUMMARY_NOT_OK));
    }

    #[test]
    fn test_throttled_line_names_conditions() {
        assert_eq!(throttled_line(&[]), THROTTLED);
        assert_eq!(
            throttled_line(&["currently throttled"]),
            "Throttling has occurred since last boot: currently throttled"
        );
        assert_eq!(
            throttled_line(&ThrottleFlags(0x7).describe()),
            "Throttling has occurred since last boot: under-voltage detected, arm frequency capped and currently throttled"
        );
        // Bits outside the known set still count as throttled.
        assert_eq!(throttled_line(&ThrottleFlags(0x100).describe()), THROTTLED);
    }
}
