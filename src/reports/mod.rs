//! Reports module for shopbooks
//!
//! The finance report (inflows vs. outflows per period), its export
//! projections, and the business snapshot shown on the dashboard.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod finance;
pub mod projection;
pub mod snapshot;

#[cfg(test)]
mod props;

pub use aggregate::{aggregate, ReportRow};
pub use dashboard::BusinessSnapshot;
pub use filter::{filter_expenses, filter_orders, DateRange};
pub use finance::{build_report, FinanceReport};
pub use projection::{ExpenseExportRow, OrderExportRow, SummaryExportRow, TOTAL_LABEL};
pub use snapshot::{RecordSnapshot, SkippedRecords};
