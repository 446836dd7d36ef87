/*!
Probe Constants

Centralized constants for the health probes to avoid string literals across crates.
*/

use std::time::Duration;

// ========== Network ==========
pub const DEFAULT_NETWORK_HOST: &str = "www.ibm.com";
pub const DEFAULT_NETWORK_PORT: u16 = 80;
pub const DEFAULT_NETWORK_TIMEOUT_MS: u64 = 3000;

// ========== Utilization ==========
/// CPU usage is averaged over this window; an instantaneous reading is meaningless.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(1000);
pub const ROOT_MOUNT_POINT: &str = "/";

// ========== Temperature ==========
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";
pub const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

// ========== Throttling (Raspberry Pi firmware) ==========
pub const CMD_VCGENCMD: &str = "vcgencmd";
pub const ARG_GET_THROTTLED: &str = "get_throttled";

pub const THROTTLE_BIT_UNDER_VOLTAGE: u32 = 1 << 0;
pub const THROTTLE_BIT_FREQ_CAPPED: u32 = 1 << 1;
pub const THROTTLE_BIT_THROTTLED: u32 = 1 << 2;
pub const THROTTLE_BIT_SOFT_TEMP_LIMIT: u32 = 1 << 3;
pub const THROTTLE_BIT_UNDER_VOLTAGE_OCCURRED: u32 = 1 << 16;
pub const THROTTLE_BIT_FREQ_CAPPED_OCCURRED: u32 = 1 << 17;
pub const THROTTLE_BIT_THROTTLED_OCCURRED: u32 = 1 << 18;
pub const THROTTLE_BIT_SOFT_TEMP_LIMIT_OCCURRED: u32 = 1 << 19;
