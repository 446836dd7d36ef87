/*!
Utilization Probes (CPU, RAM, root filesystem)

CPU and RAM come from the sysinfo crate, disk usage from `statvfs(3)` on the
configured path. Unlike the other probes these are not expected to fail, so a failure is returned as
[`HardwareError::Utilization`] and aborts the snapshot.
*/

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

use crate::{HardwareError, Result};

/// Utilization percentages, each in `[0.0, 100.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationResult {
    pub cpu_percent: f64,
    pub mem_percent: f64,
    pub disk_percent: f64,
}

/// Read CPU, memory and disk utilization in one go.
pub fn probe_utilization(cpu_window: Duration, mount_point: &Path) -> Result<UtilizationResult> {
    let result = UtilizationResult {
        cpu_percent: cpu_percent(cpu_window)?,
        mem_percent: memory_percent()?,
        disk_percent: disk_percent(mount_point)?,
    };
    debug!(?result, "Utilization sampled");
    Ok(result)
}

/// Global CPU usage averaged over `window`.
///
/// Blocks the caller for the whole window (never less than the minimum
/// refresh interval sysinfo needs between two readings).
pub fn cpu_percent(window: Duration) -> Result<f64> {
    let mut sys = System::new_with_specifics(
        RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
    );
    if sys.cpus().is_empty() {
        return Err(HardwareError::Utilization("no CPUs reported by the OS".to_string()));
    }

    std::thread::sleep(window.max(MINIMUM_CPU_UPDATE_INTERVAL));
    sys.refresh_cpu_usage();

    Ok(round_percent(f64::from(sys.global_cpu_usage())))
}

/// Share of system RAM that is not available to new processes.
pub fn memory_percent() -> Result<f64> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(HardwareError::Utilization("total memory reported as zero".to_string()));
    }

    Ok(used_percent(total, sys.available_memory()))
}

/// Usage of the filesystem holding `path`, as `df` and psutil report it.
///
/// Blocks reserved for root count as neither used nor available:
/// `used = total - free` and the percentage is `used / (used + available)`.
pub fn disk_percent(path: &Path) -> Result<f64> {
    let space = filesystem_space(path)?;
    if space.total == 0 {
        return Err(HardwareError::Utilization(format!(
            "filesystem at {} reports zero size",
            path.display()
        )));
    }
    debug!(path = %path.display(), ?space, "Filesystem space read");

    Ok(space.used_percent())
}

/// Byte counts of one filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilesystemSpace {
    pub total: u64,
    /// Free blocks including the ones reserved for root.
    pub free: u64,
    /// Free blocks an unprivileged process may use.
    pub available: u64,
}

impl FilesystemSpace {
    pub(crate) fn used_percent(&self) -> f64 {
        let used = self.total - self.free.min(self.total);
        let usable = used + self.available;
        if usable == 0 {
            return 0.0;
        }
        round_percent(used as f64 / usable as f64 * 100.0)
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)] // statvfs field widths differ per platform
fn filesystem_space(path: &Path) -> Result<FilesystemSpace> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
        HardwareError::Utilization(format!("path {} contains a NUL byte", path.display()))
    })?;

    // SAFETY: `c_path` is a valid NUL-terminated string and `stat` is a
    // plain C struct that statvfs fills in completely on success.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(HardwareError::Utilization(format!(
            "statvfs({}) failed: {}",
            path.display(),
            std::io::Error::last_os_error()
        )));
    }

    let fragment = stat.f_frsize as u64;
    Ok(FilesystemSpace {
        total: (stat.f_blocks as u64).saturating_mul(fragment),
        free: (stat.f_bfree as u64).saturating_mul(fragment),
        available: (stat.f_bavail as u64).saturating_mul(fragment),
    })
}

/// sysinfo exposes no reserved-block count here, so free and available
/// coincide. The disk with the longest mount point prefixing `path` wins.
#[cfg(not(unix))]
fn filesystem_space(path: &Path) -> Result<FilesystemSpace> {
    use sysinfo::Disks;

    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .ok_or_else(|| {
            HardwareError::Utilization(format!("no filesystem mounted at {}", path.display()))
        })?;

    Ok(FilesystemSpace {
        total: disk.total_space(),
        free: disk.available_space(),
        available: disk.available_space(),
    })
}

/// `(total - available) / total` as a percentage with one decimal.
pub(crate) fn used_percent(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total - available.min(total);
    round_percent(used as f64 / total as f64 * 100.0)
}

fn round_percent(value: f64) -> f64 {
    ((value * 10.0).round() / 10.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_percent() {
        assert_eq!(used_percent(1000, 250), 75.0);
        assert_eq!(used_percent(1000, 1000), 0.0);
        assert_eq!(used_percent(1000, 0), 100.0);
        assert_eq!(used_percent(3, 2), 33.3);
    }

    #[test]
    fn test_available_above_total_clamps() {
        assert_eq!(used_percent(100, 200), 0.0);
        assert_eq!(used_percent(0, 10), 0.0);
    }

    #[test]
    fn test_reserved_blocks_count_as_neither_used_nor_available() {
        // 1000 blocks, 150 free of which 50 are reserved for root.
        let space = FilesystemSpace {
            total: 1000,
            free: 150,
            available: 100,
        };
        // 850 used out of 950 usable, not 900 out of 1000.
        assert_eq!(space.used_percent(), 89.5);
        assert_ne!(space.used_percent(), used_percent(space.total, space.available));
    }

    #[test]
    fn test_reserved_blocks_do_not_push_usage_over_threshold() {
        // 5% reserved for root: df reports 89.7%, not the 90.5% that
        // (total - available) / total would give.
        let space = FilesystemSpace {
            total: 10_000,
            free: 1_700,
            available: 950,
        };
        assert_eq!(space.used_percent(), 89.7);
        assert_eq!(used_percent(space.total, space.available), 90.5);
    }

    #[test]
    fn test_empty_filesystem_space() {
        let space = FilesystemSpace {
            total: 0,
            free: 0,
            available: 0,
        };
        assert_eq!(space.used_percent(), 0.0);
    }

    #[test]
    fn test_disk_percent_reads_the_given_path() {
        // Any directory works: statvfs resolves the filesystem holding it.
        let dir = tempfile::tempdir().unwrap();
        let disk = disk_percent(dir.path()).unwrap();
        assert!((0.0..=100.0).contains(&disk));
    }

    #[cfg(unix)]
    #[test]
    fn test_disk_percent_missing_path_is_an_error() {
        let err = disk_percent(Path::new("/definitely/not/a/real/path")).unwrap_err();
        assert!(matches!(err, HardwareError::Utilization(_)));
    }

    #[test]
    fn test_memory_percent_in_range() {
        let mem = memory_percent().unwrap();
        println!("Memory: {}%", mem);
        assert!((0.0..=100.0).contains(&mem));
    }
}
