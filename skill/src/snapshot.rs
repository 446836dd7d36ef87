//! One-shot health snapshot.

use howthings_hardware::{ProbeReadings, SystemProbe};
use serde::Serialize;
use tracing::info;

use crate::{HealthConfig, Result, Verdict};

/// Built fresh for each request and dropped after narration. Holds no state
/// shared with other snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub readings: ProbeReadings,
    pub verdict: Verdict,
}

impl HealthSnapshot {
    /// Run every probe once and evaluate the verdict.
    ///
    /// Only a utilization failure aborts the snapshot.
    pub fn capture<P: SystemProbe + ?Sized>(probe: &P, config: &HealthConfig) -> Result<Self> {
        let readings = probe.read_all(&config.network_target())?;
        let snapshot = Self::from_readings(readings, config);

        info!(
            ok = snapshot.verdict.ok,
            reasons = ?snapshot.verdict.reason_messages(),
            inconclusive = ?snapshot.verdict.inconclusive,
            "Health snapshot captured"
        );
        Ok(snapshot)
    }

    pub fn from_readings(readings: ProbeReadings, config: &HealthConfig) -> Self {
        let verdict = Verdict::evaluate(&readings, config);
        Self { readings, verdict }
    }
}
