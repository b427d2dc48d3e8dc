//! Collectors module for host status readings.
//!
//! This module contains the readers for the kernel pseudo-files sampled on
//! every run: battery current, thermal zones, memory/swap from /proc/meminfo
//! and mount point usage via statvfs.

pub mod current;
pub mod filesystem;
pub mod meminfo;
pub mod thermal;

use std::fs;
use std::path::Path;

use crate::error::SensorError;

/// Reads the first whitespace-separated integer token of a sysfs value file.
///
/// The file is opened, read and closed within this call.
pub(crate) fn read_integer(path: &Path) -> Result<i64, SensorError> {
    let content = fs::read_to_string(path).map_err(|source| SensorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .ok_or_else(|| SensorError::Parse {
            path: path.to_path_buf(),
            content: content.trim().to_string(),
        })
}
