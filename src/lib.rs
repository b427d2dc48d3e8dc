//! genmon-system-status library
//!
//! Samples battery current, thermal zones, memory/swap and mount point usage
//! once and renders them as the title and tooltip blocks of the xfce4 genmon
//! panel applet.
//!
//! # Usage
//!
//! ```rust,no_run
//! use genmon_system_status::{render, Config, Snapshot};
//!
//! let config = Config::builtin()?;
//! let snapshot = Snapshot::collect(&config)?;
//! print!("{}", render(&snapshot, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Readers that fail degrade to unavailable readings, except
//! `/proc/meminfo`, whose failure aborts the sample.

pub mod collectors;
pub mod config;
pub mod error;
pub mod power;
pub mod render;
pub mod snapshot;

// Re-export main types for convenience
pub use config::{Config, OutputFormat};
pub use error::{ConfigError, DiskError, MeminfoError, PowerError, SensorError};
pub use render::{render, render_failure, Rendered};
pub use snapshot::Snapshot;
