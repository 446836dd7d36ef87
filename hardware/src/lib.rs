/*!
# HowAreThings Hardware Probes

Reads the independent health signals of the host machine.

## Features

- Network reachability via a single TCP connect
- CPU, memory and root filesystem utilization (sysinfo)
- Core temperature from the primary thermal zone
- Power-throttling history from the firmware tool
- Serializable results for JSON output

Only the utilization counters can fail. Every other probe maps an absent or
broken data source to a defined fallback value and logs it.

## Example

```rust,no_run
use howthings_hardware::{HostProbe, NetworkTarget, SystemProbe};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let probe = HostProbe::default();
    let readings = probe.read_all(&NetworkTarget::default())?;
    println!("CPU: {}%", readings.utilization.cpu_percent);
    println!("Throttled: {}", readings.throttle.is_throttled());
    Ok(())
}
```
*/

use thiserror::Error;

pub mod constants;
mod network;
mod probe;
mod thermal;
mod throttle;
mod utilization;

pub use network::{probe_network, NetworkResult, NetworkTarget};
pub use probe::{HostProbe, ProbeReadings, ProbeResult, SystemProbe};
pub use thermal::{parse_millidegrees, read_temperature_from, TemperatureResult};
pub use throttle::{parse_throttled, probe_throttle_with, ThrottleFlags, ThrottleResult};
pub use utilization::{cpu_percent, disk_percent, memory_percent, probe_utilization, UtilizationResult};

#[derive(Debug, Error)]
pub enum HardwareError {
    #[error("Failed to read utilization counters: {0}")]
    Utilization(String),
}

pub type Result<T> = std::result::Result<T, HardwareError>;
