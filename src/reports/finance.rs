//! Finance Report
//!
//! Inflows (paid, uncancelled orders) against outflows (expenses) for a date
//! range, bucketed by day, month or year.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ShopResult;
use crate::models::{Expense, Granularity, Money, Order};
use crate::storage::RecordSource;

use super::aggregate::{aggregate, ReportRow};
use super::filter::{filter_expenses, filter_orders, DateRange};
use super::snapshot::{RecordSnapshot, SkippedRecords};

/// Finance Report
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceReport {
    /// Range the report covers
    pub range: DateRange,
    /// Bucketing resolution of `rows`
    pub granularity: Granularity,
    /// One row per touched period, oldest first
    pub rows: Vec<ReportRow>,
    /// Sum of qualifying order totals in range
    pub total_inflow: Money,
    /// Sum of expense amounts in range
    pub total_outflow: Money,
    /// Qualifying orders in range
    pub filtered_orders: Vec<Order>,
    /// Expenses in range
    pub filtered_expenses: Vec<Expense>,
    /// Raw records excluded before filtering
    pub skipped: SkippedRecords,
}

impl FinanceReport {
    /// Generate a report over already-validated records
    pub fn generate(
        orders: &[Order],
        expenses: &[Expense],
        range: DateRange,
        granularity: Granularity,
    ) -> Self {
        let filtered_orders = filter_orders(orders, &range);
        let filtered_expenses = filter_expenses(expenses, &range);

        let rows = aggregate(&filtered_orders, &filtered_expenses, granularity);
        let total_inflow: Money = filtered_orders.iter().map(|o| o.total).sum();
        let total_outflow: Money = filtered_expenses.iter().map(|e| e.amount).sum();

        debug!(
            %range,
            %granularity,
            orders = filtered_orders.len(),
            expenses = filtered_expenses.len(),
            rows = rows.len(),
            "finance report generated"
        );

        Self {
            range,
            granularity,
            rows,
            total_inflow,
            total_outflow,
            filtered_orders,
            filtered_expenses,
            skipped: SkippedRecords::default(),
        }
    }

    /// Fetch a fresh snapshot from `source` and generate the report from it
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` when either collection cannot be fetched; no
    /// report is produced in that case.
    pub fn from_source<S: RecordSource + ?Sized>(
        source: &S,
        range: DateRange,
        granularity: Granularity,
    ) -> ShopResult<Self> {
        let snapshot = RecordSnapshot::fetch(source)?;
        let mut report = Self::generate(&snapshot.orders, &snapshot.expenses, range, granularity);
        report.skipped = snapshot.skipped;
        Ok(report)
    }

    /// Total inflow minus total outflow
    pub fn balance(&self) -> Money {
        self.total_inflow - self.total_outflow
    }

    /// Whether any record fell inside the range
    pub fn has_activity(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// Build a finance report from explicit parameters
///
/// An inverted range (`from > to`) yields an empty report rather than an error.
pub fn build_report(
    orders: &[Order],
    expenses: &[Expense],
    from: NaiveDate,
    to: NaiveDate,
    granularity: Granularity,
) -> FinanceReport {
    FinanceReport::generate(orders, expenses, DateRange::new(from, to), granularity)
}
