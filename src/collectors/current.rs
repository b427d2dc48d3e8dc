//! Battery current collector.
//!
//! Reads `current_now` from a power supply device, e.g.
//! /sys/class/power_supply/BAT1/current_now, which holds microamps.

use std::path::Path;

use tracing::debug;

use crate::error::SensorError;

const MICROAMPS_PER_AMP: f64 = 1_000_000.0;

/// Reads the battery current in amps.
pub fn read_current(path: &Path) -> Result<f64, SensorError> {
    let microamps = super::read_integer(path)?;
    Ok(microamps_to_amps(microamps))
}

/// Converts a raw microamp value to amps.
pub fn microamps_to_amps(microamps: i64) -> f64 {
    microamps as f64 / MICROAMPS_PER_AMP
}

/// Samples the current, mapping any failure to an unavailable reading.
pub fn sample_current(path: &Path) -> Option<f64> {
    match read_current(path) {
        Ok(amps) => Some(amps),
        Err(e) => {
            debug!("Battery current unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_microamps_to_amps() {
        assert!((microamps_to_amps(123_000) - 0.123).abs() < 1e-12);
        assert_eq!(microamps_to_amps(0), 0.0);
        assert!((microamps_to_amps(-2_500_000) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_read_current_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current_now");
        fs::write(&path, "1234000\n").unwrap();

        let amps = read_current(&path).unwrap();
        assert!((amps - 1.234).abs() < 1e-12);
    }

    #[test]
    fn test_zero_current_is_not_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("current_now");
        fs::write(&present, "0\n").unwrap();

        assert_eq!(sample_current(&present), Some(0.0));
        assert_eq!(sample_current(&dir.path().join("missing")), None);
    }
}
