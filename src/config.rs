//! Device list configuration for genmon-system-status.
//!
//! The list of sampled devices is fixed at build time: `devices.toml` at the
//! crate root is embedded into the binary and parsed on startup. There is no
//! runtime configuration file.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Device list compiled into the binary.
pub const BUILTIN_DEVICES: &str = include_str!("../devices.toml");

pub const DEFAULT_MEMINFO_PATH: &str = "/proc/meminfo";

/// Serialization format for `--show-config` and `--snapshot`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
    Toml,
}

/// Paths of every sampled device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Battery current file, microamps.
    pub current_device: PathBuf,
    /// Thermal zone files, millidegrees Celsius, in display order.
    pub temperature_devices: Vec<PathBuf>,
    /// Mount points queried with statvfs, in display order.
    pub disk_mounts: Vec<PathBuf>,
    #[serde(default = "default_meminfo_path")]
    pub meminfo_path: PathBuf,
}

fn default_meminfo_path() -> PathBuf {
    PathBuf::from(DEFAULT_MEMINFO_PATH)
}

impl Config {
    /// Parses the device list embedded at build time.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_DEVICES)
    }

    /// Parses and validates a device list.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        validate_effective_config(&config)?;
        Ok(config)
    }
}

/// Validates a device list (used by --check-config and at startup).
pub fn validate_effective_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.temperature_devices.is_empty() {
        return Err(ConfigError::Invalid(
            "temperature_devices must list at least one thermal zone".into(),
        ));
    }

    let all_paths = std::iter::once(("current_device", &cfg.current_device))
        .chain(std::iter::once(("meminfo_path", &cfg.meminfo_path)))
        .chain(cfg.temperature_devices.iter().map(|p| ("temperature_devices", p)))
        .chain(cfg.disk_mounts.iter().map(|p| ("disk_mounts", p)));

    for (field, path) in all_paths {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(format!("{} contains an empty path", field)));
        }
        if !path.is_absolute() {
            return Err(ConfigError::Invalid(format!(
                "{} path '{}' is not absolute",
                field,
                path.display()
            )));
        }
    }

    let mut seen = HashSet::new();
    for mount in &cfg.disk_mounts {
        if !seen.insert(mount) {
            return Err(ConfigError::Invalid(format!(
                "disk_mounts lists '{}' more than once",
                mount.display()
            )));
        }
    }

    Ok(())
}

/// Shows configuration in requested format
pub fn show_config(
    config: &Config,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
current_device = "/sys/class/power_supply/BAT0/current_now"
temperature_devices = ["/sys/class/thermal/thermal_zone0/temp"]
disk_mounts = ["/", "/home"]
"#;

    #[test]
    fn test_builtin_device_list_is_valid() {
        let config = Config::builtin().expect("embedded devices.toml must parse");
        assert_eq!(
            config.current_device,
            PathBuf::from("/sys/class/power_supply/BAT1/current_now")
        );
        assert_eq!(config.temperature_devices.len(), 3);
        assert_eq!(
            config.disk_mounts,
            vec![
                PathBuf::from("/"),
                PathBuf::from("/home"),
                PathBuf::from("/data")
            ]
        );
        assert_eq!(config.meminfo_path, PathBuf::from(DEFAULT_MEMINFO_PATH));
    }

    #[test]
    fn test_meminfo_path_defaults() {
        let config = Config::from_toml_str(VALID).unwrap();
        assert_eq!(config.meminfo_path, PathBuf::from("/proc/meminfo"));
        assert_eq!(config.disk_mounts.len(), 2);
    }

    #[test]
    fn test_rejects_no_thermal_zones() {
        let bad = VALID.replace(
            r#"["/sys/class/thermal/thermal_zone0/temp"]"#,
            "[]",
        );
        let err = Config::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("temperature_devices"));
    }

    #[test]
    fn test_rejects_relative_path() {
        let bad = VALID.replace(r#"["/", "/home"]"#, r#"["/", "home"]"#);
        let err = Config::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("not absolute"));
    }

    #[test]
    fn test_rejects_duplicate_mount() {
        let bad = VALID.replace(r#"["/", "/home"]"#, r#"["/home", "/home"]"#);
        let err = Config::from_toml_str(&bad).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_rejects_missing_field() {
        let bad = VALID.replace("disk_mounts", "disks");
        assert!(matches!(
            Config::from_toml_str(&bad),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_mount_list_is_allowed() {
        let config = Config::from_toml_str(&VALID.replace(r#"["/", "/home"]"#, "[]")).unwrap();
        assert!(config.disk_mounts.is_empty());
    }

    #[test]
    fn test_show_config_formats() {
        let config = Config::from_toml_str(VALID).unwrap();

        let json = show_config(&config, OutputFormat::Json).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let yaml = show_config(&config, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("current_device"));

        let toml_out = show_config(&config, OutputFormat::Toml).unwrap();
        assert_eq!(Config::from_toml_str(&toml_out).unwrap(), config);
    }
}
