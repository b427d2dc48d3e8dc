//! genmon-system-status - version 0.1.0
//!
//! Samples the host once and prints the xfce4 genmon title and tooltip
//! blocks on stdout. Logs go to stderr.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};

use cli::{Args, LogLevel};
use commands::command_check;
use genmon_system_status::config::show_config;
use genmon_system_status::{render, render_failure, Config, OutputFormat, Snapshot};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    let log_level = match args.log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    // stdout belongs to genmon
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    debug!("Logging initialized with level: {:?}", args.log_level);
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) -> anyhow::Result<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(snapshot)?,
        OutputFormat::Toml => toml::to_string_pretty(snapshot)?,
        OutputFormat::Yaml => serde_yaml::to_string(snapshot)?,
    };
    println!("{output}");
    Ok(())
}

/// Main application entry point.
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    setup_logging(&args)?;

    if args.check_config {
        return Ok(match Config::builtin() {
            Ok(_) => {
                println!("✅ Device list is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Device list invalid: {}", e);
                ExitCode::FAILURE
            }
        });
    }

    let panel_id = args.panel_id();

    let config = match Config::builtin() {
        Ok(config) => config,
        Err(e) => {
            error!("Compiled-in device list is invalid: {}", e);
            print!("{}", render_failure(panel_id, &e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.show_config {
        let output = show_config(&config, args.format).map_err(|e| anyhow::anyhow!(e))?;
        println!("{output}");
        return Ok(ExitCode::SUCCESS);
    }

    if args.check {
        return Ok(if command_check(&config) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match Snapshot::collect(&config) {
        Ok(snapshot) => {
            if args.snapshot {
                print_snapshot(&snapshot, args.format)?;
            } else {
                print!("{}", render(&snapshot, panel_id));
            }
            info!("Sample rendered for genmon panel {}", panel_id);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Failed to sample memory usage: {}", e);
            print!("{}", render_failure(panel_id, &e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
