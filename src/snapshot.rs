//! One point-in-time sample of every configured device.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::collectors::current::sample_current;
use crate::collectors::filesystem::{read_disk_usage, DiskUsage};
use crate::collectors::meminfo::{read_memory, MemorySnapshot};
use crate::collectors::thermal::{read_temperatures, TemperatureSnapshot};
use crate::config::Config;
use crate::error::MeminfoError;

/// Readings from a single run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub sampled_at: DateTime<Utc>,
    /// Battery current in amps, `None` when unavailable.
    pub current: Option<f64>,
    pub memory: MemorySnapshot,
    pub temperature: TemperatureSnapshot,
    /// Omitted when empty; toml rejects a bare value after a table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<DiskUsage>,
}

impl Snapshot {
    /// Reads every device once, in sequence.
    ///
    /// Only a meminfo failure aborts the sample; the other readers degrade
    /// to unavailable readings.
    pub fn collect(config: &Config) -> Result<Self, MeminfoError> {
        let sampled_at = Utc::now();
        let memory = read_memory(&config.meminfo_path)?;
        let current = sample_current(&config.current_device);
        let temperature = read_temperatures(&config.temperature_devices);
        let disks = read_disk_usage(&config.disk_mounts);

        debug!(
            "Sampled memory={:.2}MB swap={:.2}MB current={:?} max_temp={:?} disks={}",
            memory.used_memory_mb,
            memory.used_swap_mb,
            current,
            temperature.max(),
            disks.len()
        );

        Ok(Self {
            sampled_at,
            current,
            memory,
            temperature,
            disks,
        })
    }
}
