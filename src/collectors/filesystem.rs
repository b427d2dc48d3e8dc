//! Filesystem usage collector.
//!
//! This module queries statvfs for each configured mount point and reports
//! used and total capacity in binary gigabytes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::error::DiskError;

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Used and total capacity of one filesystem, in GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiskCapacity {
    pub used_gb: f64,
    pub total_gb: f64,
}

impl DiskCapacity {
    /// Derives capacity from statvfs block counts.
    ///
    /// `free_blocks` is `f_bfree` (including root-reserved blocks), so used
    /// is `total - free` as `df` counts it before reservations.
    pub fn from_blocks(blocks: u64, fragment_size: u64, free_blocks: u64) -> Self {
        let total_gb = (blocks as f64 * fragment_size as f64) / BYTES_PER_GB;
        let available_gb = (free_blocks as f64 * fragment_size as f64) / BYTES_PER_GB;
        Self {
            used_gb: total_gb - available_gb,
            total_gb,
        }
    }

    pub fn available_gb(&self) -> f64 {
        self.total_gb - self.used_gb
    }
}

/// Usage of one configured mount point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskUsage {
    pub mount: PathBuf,
    /// `None` when statvfs failed for this mount.
    pub capacity: Option<DiskCapacity>,
}

/// Queries statvfs for a single path.
pub fn read_disk_capacity(path: &Path) -> Result<DiskCapacity, DiskError> {
    use std::ffi::CString;
    use std::mem;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| DiskError::InvalidPath {
        path: path.to_path_buf(),
    })?;

    // SAFETY: statvfs only writes into the zeroed struct we own, and the
    // struct is only read after a successful return.
    let stat = unsafe {
        let mut stat: libc::statvfs = mem::zeroed();
        if libc::statvfs(c_path.as_ptr(), &mut stat) != 0 {
            return Err(DiskError::Statvfs {
                path: path.to_path_buf(),
                source: std::io::Error::last_os_error(),
            });
        }
        stat
    };

    Ok(DiskCapacity::from_blocks(
        stat.f_blocks as u64,
        stat.f_frsize as u64,
        stat.f_bfree as u64,
    ))
}

/// Reads usage for every configured mount, in order. The result always has
/// one entry per path; failed mounts carry no capacity.
pub fn read_disk_usage<P: AsRef<Path>>(mounts: &[P]) -> Vec<DiskUsage> {
    mounts
        .iter()
        .map(|m| {
            let mount = m.as_ref();
            let capacity = match read_disk_capacity(mount) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("Disk usage unavailable: {}", e);
                    None
                }
            };
            DiskUsage {
                mount: mount.to_path_buf(),
                capacity,
            }
        })
        .collect()
}
