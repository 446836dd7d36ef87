/*!
Core Temperature

Reads the primary thermal zone exactly once. An absent or unreadable source
is reported as [`TemperatureResult::Unavailable`], never as an error.
*/

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::constants::MILLIDEGREES_PER_DEGREE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TemperatureResult {
    Available { celsius: f64 },
    Unavailable,
}

impl TemperatureResult {
    pub fn celsius(&self) -> Option<f64> {
        match self {
            Self::Available { celsius } => Some(*celsius),
            Self::Unavailable => None,
        }
    }
}

/// Parse the kernel's milli-degree integer representation into °C.
pub fn parse_millidegrees(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|milli| milli as f64 / MILLIDEGREES_PER_DEGREE)
}

/// Read a thermal zone file such as `/sys/class/thermal/thermal_zone0/temp`.
pub fn read_temperature_from(path: &Path) -> TemperatureResult {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Temperature source unavailable");
            return TemperatureResult::Unavailable;
        }
    };

    match parse_millidegrees(&raw) {
        Some(celsius) => TemperatureResult::Available { celsius },
        None => {
            warn!(path = %path.display(), raw = raw.trim(), "Unparseable temperature reading");
            TemperatureResult::Unavailable
        }
    }
}
