/*!
Probe Seam

`SystemProbe` is what the aggregator talks to. `HostProbe` reads the real
machine; tests substitute their own readings.
*/

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::*;
use crate::network::{probe_network, NetworkResult, NetworkTarget};
use crate::thermal::{read_temperature_from, TemperatureResult};
use crate::throttle::{probe_throttle_with, ThrottleResult};
use crate::utilization::{probe_utilization, UtilizationResult};
use crate::Result;

/// One reading per health signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "probe", rename_all = "snake_case")]
pub enum ProbeResult {
    Network(NetworkResult),
    Utilization(UtilizationResult),
    Temperature(TemperatureResult),
    Throttle(ThrottleResult),
}

/// All readings of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeReadings {
    pub network: NetworkResult,
    pub utilization: UtilizationResult,
    pub temperature: TemperatureResult,
    pub throttle: ThrottleResult,
}

impl ProbeReadings {
    /// Readings in the order checks are evaluated and narrated.
    pub fn in_check_order(&self) -> [ProbeResult; 4] {
        [
            ProbeResult::Network(self.network),
            ProbeResult::Utilization(self.utilization),
            ProbeResult::Temperature(self.temperature),
            ProbeResult::Throttle(self.throttle),
        ]
    }
}

pub trait SystemProbe {
    fn network(&self, target: &NetworkTarget) -> NetworkResult;

    /// The only probe allowed to fail.
    fn utilization(&self) -> Result<UtilizationResult>;

    fn temperature(&self) -> TemperatureResult;

    fn throttle(&self) -> ThrottleResult;

    /// Run every probe once, network first.
    fn read_all(&self, target: &NetworkTarget) -> Result<ProbeReadings> {
        let network = self.network(target);
        let utilization = self.utilization()?;
        let temperature = self.temperature();
        let throttle = self.throttle();

        Ok(ProbeReadings {
            network,
            utilization,
            temperature,
            throttle,
        })
    }
}

/// Probes backed by the OS, the thermal zone file and the firmware tool.
#[derive(Debug, Clone)]
pub struct HostProbe {
    pub cpu_window: Duration,
    pub mount_point: PathBuf,
    pub thermal_zone: PathBuf,
    pub throttle_command: String,
    pub throttle_args: Vec<String>,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self {
            cpu_window: CPU_SAMPLE_WINDOW,
            mount_point: PathBuf::from(ROOT_MOUNT_POINT),
            thermal_zone: PathBuf::from(THERMAL_ZONE_PATH),
            throttle_command: CMD_VCGENCMD.to_string(),
            throttle_args: vec![ARG_GET_THROTTLED.to_string()],
        }
    }
}

impl SystemProbe for HostProbe {
    fn network(&self, target: &NetworkTarget) -> NetworkResult {
        probe_network(target)
    }

    fn utilization(&self) -> Result<UtilizationResult> {
        probe_utilization(self.cpu_window, &self.mount_point)
    }

    fn temperature(&self) -> TemperatureResult {
        read_temperature_from(&self.thermal_zone)
    }

    fn throttle(&self) -> ThrottleResult {
        let args: Vec<&str> = self.throttle_args.iter().map(String::as_str).collect();
        probe_throttle_with(&self.throttle_command, &args)
    }
}
