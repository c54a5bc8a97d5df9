//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports and the dashboard for terminal
//! display.

pub mod dashboard;
pub mod report;

pub use dashboard::format_business_snapshot;
pub use report::{
    format_expense_details, format_finance_report, format_order_details, format_report_title,
    format_skipped_notice,
};
