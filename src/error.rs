//! Error types for collectors, configuration and the power-off helper.

use std::path::PathBuf;

/// A single-value sensor file could not be turned into a reading.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no integer value in {}: {content:?}", path.display())]
    Parse { path: PathBuf, content: String },
}

/// `/proc/meminfo` is unreadable or lacks one of the required fields.
#[derive(Debug, thiserror::Error)]
pub enum MeminfoError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required field {0} not found in meminfo")]
    MissingField(&'static str),

    #[error("field {field} has no numeric value: {line:?}")]
    MalformedField { field: &'static str, line: String },
}

/// statvfs failed for a mount point.
#[derive(Debug, thiserror::Error)]
pub enum DiskError {
    #[error("invalid mount path {}: contains a NUL byte", path.display())]
    InvalidPath { path: PathBuf },

    #[error("statvfs failed for {}: {source}", path.display())]
    Statvfs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse device list: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid device list: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PowerError {
    #[error("reboot(RB_POWER_OFF) failed: {0}")]
    Reboot(#[from] nix::Error),
}
