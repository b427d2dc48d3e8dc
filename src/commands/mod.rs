//! CLI command implementations for genmon-system-status.
//!
//! - `check`: device availability report

pub mod check;

pub use check::command_check;
