//! CLI arguments for genmon-system-status.
//!
//! The only argument genmon passes is the panel instance id, used to build
//! the click-to-refresh action. The flags are diagnostics for setting up the
//! device list.

use clap::{Parser, ValueEnum};
use genmon_system_status::OutputFormat;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    ")"
);

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "genmon-system-status",
    about = "Host status (memory, swap, current, temperature, disks) for the xfce4 genmon applet",
    long_about = "Host status for the xfce4 genmon applet.\n\n\
                  Samples memory and swap usage, battery current, thermal zones and mount \
                  point usage once, then prints the genmon title and tooltip blocks. \
                  Configure the genmon command as `genmon-system-status <panel id>`.",
    version,
    long_version = LONG_VERSION
)]
pub struct Args {
    /// genmon panel instance id for the click-to-refresh action (non-numeric means 0)
    #[arg(value_name = "PANEL_ID", allow_negative_numbers = true)]
    pub panel_id: Option<String>,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print the compiled-in device list and exit
    #[arg(long)]
    pub show_config: bool,

    /// Validate the compiled-in device list and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Check every configured device and exit (return code 1 if meminfo is unusable)
    #[arg(long)]
    pub check: bool,

    /// Print the collected readings instead of genmon markup
    #[arg(long)]
    pub snapshot: bool,

    /// Output format for --show-config and --snapshot
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,
}

impl Args {
    /// Panel id parsed the way C `atoi` does; 0 when absent or non-numeric.
    pub fn panel_id(&self) -> i64 {
        self.panel_id.as_deref().map(parse_panel_id).unwrap_or(0)
    }
}

/// Parses leading whitespace, an optional sign and leading digits.
pub fn parse_panel_id(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}
