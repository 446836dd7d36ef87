/*!
Throttle History

Asks the firmware tool (`vcgencmd get_throttled`) for the bitmask of
throttling events since boot.

Fail-safe: only an explicit zero bitmask counts as "not throttled". A missing
tool, a failed invocation or output that cannot be parsed all yield
[`ThrottleResult::Unknown`], which is treated as throttled. Absence of
evidence of no throttling is taken as evidence of throttling.
*/

use serde::{Deserialize, Serialize};
use std::process::Command;
use tracing::{debug, warn};

use crate::constants::*;

/// Raw `get_throttled` bitmask.
///
/// Serializes as `{"bits": .., "conditions": [..]}` so reports carry the
/// decoded names next to the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FlagsRepr", from = "FlagsRepr")]
pub struct ThrottleFlags(pub u32);

#[derive(Serialize, Deserialize)]
struct FlagsRepr {
    bits: u32,
    #[serde(default)]
    conditions: Vec<String>,
}

impl From<ThrottleFlags> for FlagsRepr {
    fn from(flags: ThrottleFlags) -> Self {
        Self {
            bits: flags.0,
            conditions: flags.describe().into_iter().map(String::from).collect(),
        }
    }
}

impl From<FlagsRepr> for ThrottleFlags {
    fn from(repr: FlagsRepr) -> Self {
        // Names are derived from the bits, never trusted on input.
        Self(repr.bits)
    }
}

impl ThrottleFlags {
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Human-readable names of the conditions set in the mask.
    pub fn describe(&self) -> Vec<&'static str> {
        const NAMES: [(u32, &str); 8] = [
            (THROTTLE_BIT_UNDER_VOLTAGE, "under-voltage detected"),
            (THROTTLE_BIT_FREQ_CAPPED, "arm frequency capped"),
            (THROTTLE_BIT_THROTTLED, "currently throttled"),
            (THROTTLE_BIT_SOFT_TEMP_LIMIT, "soft temperature limit active"),
            (THROTTLE_BIT_UNDER_VOLTAGE_OCCURRED, "under-voltage has occurred"),
            (THROTTLE_BIT_FREQ_CAPPED_OCCURRED, "arm frequency capping has occurred"),
            (THROTTLE_BIT_THROTTLED_OCCURRED, "throttling has occurred"),
            (THROTTLE_BIT_SOFT_TEMP_LIMIT_OCCURRED, "soft temperature limit has occurred"),
        ];

        NAMES
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::fmt::Display for ThrottleFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ThrottleResult {
    NotThrottled,
    Throttled { flags: ThrottleFlags },
    Unknown,
}

impl ThrottleResult {
    /// `Unknown` counts as throttled.
    pub fn is_throttled(&self) -> bool {
        !matches!(self, Self::NotThrottled)
    }
}

/// Parse `get_throttled` output, e.g. `throttled=0x50000`.
pub fn parse_throttled(output: &str) -> ThrottleResult {
    let value = output.trim();
    let value = value.rsplit_once('=').map_or(value, |(_, v)| v).trim();
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    match u32::from_str_radix(hex, 16) {
        Ok(0) => ThrottleResult::NotThrottled,
        Ok(bits) => ThrottleResult::Throttled {
            flags: ThrottleFlags(bits),
        },
        Err(e) => {
            warn!(output = output.trim(), error = %e, "Unparseable throttle status, assuming throttled");
            ThrottleResult::Unknown
        }
    }
}

/// Run `program args..` and parse its stdout as throttle status.
pub fn probe_throttle_with(program: &str, args: &[&str]) -> ThrottleResult {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            warn!(program, error = %e, "Throttle tool unavailable, assuming throttled");
            return ThrottleResult::Unknown;
        }
    };

    if !output.status.success() {
        warn!(program, status = %output.status, "Throttle tool failed, assuming throttled");
        return ThrottleResult::Unknown;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result = parse_throttled(&stdout);
    debug!(?result, "Throttle status read");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_throttled() {
        assert_eq!(parse_throttled("0x0"), ThrottleResult::NotThrottled);
        assert_eq!(parse_throttled("throttled=0x0\n"), ThrottleResult::NotThrottled);
    }

    #[test]
    fn test_nonzero_is_throttled() {
        let result = parse_throttled("0x50000");
        assert_eq!(
            result,
            ThrottleResult::Throttled {
                flags: ThrottleFlags(0x50000)
            }
        );
        assert!(result.is_throttled());

        assert!(parse_throttled("throttled=0x50005").is_throttled());
    }

    #[test]
    fn test_garbage_is_unknown_and_throttled() {
        let result = parse_throttled("VCHI initialization failed");
        assert_eq!(result, ThrottleResult::Unknown);
        assert!(result.is_throttled());
        assert_eq!(parse_throttled(""), ThrottleResult::Unknown);
    }

    #[test]
    fn test_missing_tool_is_unknown() {
        let result = probe_throttle_with("howthings-no-such-firmware-tool", &["get_throttled"]);
        assert_eq!(result, ThrottleResult::Unknown);
        assert!(result.is_throttled());
    }

    #[test]
    #[cfg(unix)]
    fn test_failing_tool_is_unknown() {
        assert_eq!(probe_throttle_with("false", &[]), ThrottleResult::Unknown);
    }

    #[test]
    #[cfg(unix)]
    fn test_tool_output_is_parsed() {
        assert_eq!(probe_throttle_with("echo", &["throttled=0x0"]), ThrottleResult::NotThrottled);
    }

    #[test]
    fn test_describe_flags() {
        let flags = ThrottleFlags(0x50000);
        assert_eq!(
            flags.describe(),
            vec!["under-voltage has occurred", "throttling has occurred"]
        );
        assert_eq!(flags.to_string(), "0x50000");
        assert!(ThrottleFlags(0).describe().is_empty());
    }

    #[test]
    fn test_flags_serialize_with_condition_names() {
        let json = serde_json::to_value(ThrottleFlags(0x50005)).unwrap();
        assert_eq!(json["bits"], 0x50005);
        assert_eq!(
            json["conditions"],
            serde_json::json!([
                "under-voltage detected",
                "currently throttled",
                "under-voltage has occurred",
                "throttling has occurred"
            ])
        );

        let back: ThrottleFlags = serde_json::from_value(json).unwrap();
        assert_eq!(back, ThrottleFlags(0x50005));
    }
}
