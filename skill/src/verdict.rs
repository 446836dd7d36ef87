//! Threshold policy and overall verdict.

use howthings_hardware::{ProbeReadings, ProbeResult, ThrottleResult};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::HealthConfig;

/// Core temperature above which the machine is considered too hot.
pub const TEMPERATURE_LIMIT_CELSIUS: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Network,
    Cpu,
    Memory,
    Disk,
    Temperature,
    Throttling,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Cpu => write!(f, "cpu"),
            Self::Memory => write!(f, "memory"),
            Self::Disk => write!(f, "disk"),
            Self::Temperature => write!(f, "temperature"),
            Self::Throttling => write!(f, "throttling"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NetworkUnreachable,
    /// Cpu, Memory or Disk above the configured threshold.
    OverThreshold(Signal),
    TemperatureHigh,
    ThrottlingDetected,
}

impl FailureReason {
    pub fn signal(&self) -> Signal {
        match self {
            Self::NetworkUnreachable => Signal::Network,
            Self::OverThreshold(signal) => *signal,
            Self::TemperatureHigh => Signal::Temperature,
            Self::ThrottlingDetected => Signal::Throttling,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkUnreachable => write!(f, "network unreachable"),
            Self::OverThreshold(signal) => write!(f, "{} over threshold", signal),
            Self::TemperatureHigh => write!(f, "temperature over threshold"),
            Self::ThrottlingDetected => write!(f, "throttling detected"),
        }
    }
}

impl Serialize for FailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pass/fail summary of one snapshot.
///
/// `ok` is false iff `reasons` is non-empty. Signals that could not be read
/// are listed in `inconclusive`; an unavailable temperature is neutral, an
/// unknown throttle state still fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub ok: bool,
    pub reasons: Vec<FailureReason>,
    pub inconclusive: Vec<Signal>,
}

impl Verdict {
    /// Evaluate every check in order network, utilization, temperature,
    /// throttling. A failing check never skips the ones after it.
    pub fn evaluate(readings: &ProbeReadings, config: &HealthConfig) -> Self {
        let threshold = config.usage_threshold_percent;
        let mut reasons = Vec::new();
        let mut inconclusive = Vec::new();

        for result in readings.in_check_order() {
            match result {
                ProbeResult::Network(network) => {
                    if !network.reachable {
                        reasons.push(FailureReason::NetworkUnreachable);
                    }
                }
                ProbeResult::Utilization(util) => {
                    let usage = [
                        (Signal::Cpu, util.cpu_percent),
                        (Signal::Memory, util.mem_percent),
                        (Signal::Disk, util.disk_percent),
                    ];
                    for (signal, percent) in usage {
                        if percent > threshold {
                            reasons.push(FailureReason::OverThreshold(signal));
                        }
                    }
                }
                ProbeResult::Temperature(temperature) => match temperature.celsius() {
                    Some(celsius) if celsius > TEMPERATURE_LIMIT_CELSIUS => {
                        reasons.push(FailureReason::TemperatureHigh);
                    }
                    Some(_) => {}
                    None => inconclusive.push(Signal::Temperature),
                },
                ProbeResult::Throttle(throttle) => {
                    if throttle.is_throttled() {
                        reasons.push(FailureReason::ThrottlingDetected);
                    }
                    if throttle == ThrottleResult::Unknown {
                        inconclusive.push(Signal::Throttling);
                    }
                }
            }
        }

        Self {
            ok: reasons.is_empty(),
            reasons,
            inconclusive,
        }
    }

    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }

    /// Whether any of CPU, memory or disk crossed the threshold.
    pub fn utilization_high(&self) -> bool {
        self.reasons
            .iter()
            .any(|reason| matches!(reason, FailureReason::OverThreshold(_)))
    }

    pub fn failed(&self, signal: Signal) -> bool {
        self.reasons.iter().any(|reason| reason.signal() == signal)
    }
}
