//! Thermal sensor collector.
//!
//! This module reads temperatures from the configured thermal zone files,
//! typically /sys/class/thermal/thermal_zone*/temp, which hold millidegrees
//! Celsius.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::SensorError;

/// Temperature reading for one configured zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermalZone {
    pub path: PathBuf,
    /// Whole degrees Celsius, `None` when the zone could not be read.
    pub celsius: Option<i64>,
}

/// Readings for all configured zones, in configured order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TemperatureSnapshot {
    pub zones: Vec<ThermalZone>,
}

impl TemperatureSnapshot {
    /// Highest temperature among the zones that were read.
    pub fn max(&self) -> Option<i64> {
        self.zones.iter().filter_map(|z| z.celsius).max()
    }
}

/// Reads one thermal zone and returns whole degrees Celsius.
///
/// The division truncates toward zero, so 42999 millidegrees is 42°C.
pub fn read_zone(path: &Path) -> Result<i64, SensorError> {
    let millidegrees = super::read_integer(path)?;
    Ok(millidegrees / 1000)
}

/// Reads every configured zone. Unreadable zones stay in the snapshot as
/// absent readings.
pub fn read_temperatures<P: AsRef<Path>>(paths: &[P]) -> TemperatureSnapshot {
    let zones = paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            let celsius = match read_zone(path) {
                Ok(c) => Some(c),
                Err(e) => {
                    debug!("Thermal zone unavailable: {}", e);
                    None
                }
            };
            ThermalZone {
                path: path.to_path_buf(),
                celsius,
            }
        })
        .collect();

    TemperatureSnapshot { zones }
}
