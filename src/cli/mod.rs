//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reporting layer.

pub mod dashboard;
pub mod report;

pub use dashboard::handle_dashboard_command;
pub use report::{handle_report_command, ReportCommands};
