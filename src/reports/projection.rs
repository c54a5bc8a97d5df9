//! Export projections
//!
//! Flat, presentation-ready rows derived from a [`FinanceReport`]. Amounts
//! are rendered with two decimals here and nowhere earlier.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Money;

use super::finance::FinanceReport;

/// Label of the grand-total line on the summary sheet
pub const TOTAL_LABEL: &str = "TOTAL";

/// One line of the summary sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryExportRow {
    pub period: String,
    pub inflow: String,
    pub outflow: String,
    pub balance: String,
}

impl SummaryExportRow {
    pub const HEADERS: [&'static str; 4] = ["Period", "Inflow", "Outflow", "Balance"];

    fn new(period: impl Into<String>, inflow: Money, outflow: Money) -> Self {
        Self {
            period: period.into(),
            inflow: inflow.to_decimal_string(),
            outflow: outflow.to_decimal_string(),
            balance: (inflow - outflow).to_decimal_string(),
        }
    }
}

/// One qualifying order on the orders sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderExportRow {
    pub id: i64,
    pub date: String,
    pub customer: String,
    pub total: String,
    pub items: String,
}

impl OrderExportRow {
    pub const HEADERS: [&'static str; 5] = ["ID", "Date", "Customer", "Total", "Items"];
}

/// One expense on the expenses sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseExportRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseExportRow {
    pub const HEADERS: [&'static str; 4] = ["ID", "Date", "Description", "Amount"];
}

/// Format a date with a user-supplied strftime pattern, falling back to ISO
/// when the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

impl FinanceReport {
    /// Period rows followed by the grand total
    pub fn summary_rows(&self) -> Vec<SummaryExportRow> {
        self.rows
            .iter()
            .map(|row| SummaryExportRow::new(row.period_key(), row.inflow, row.outflow))
            .chain(std::iter::once(SummaryExportRow::new(
                TOTAL_LABEL,
                self.total_inflow,
                self.total_outflow,
            )))
            .collect()
    }

    /// One row per qualifying order, in delivery-date order
    pub fn order_rows(&self, date_pattern: &str) -> Vec<OrderExportRow> {
        let mut orders: Vec<_> = self.filtered_orders.iter().collect();
        orders.sort_by(|a, b| a.delivery_date.cmp(&b.delivery_date).then(a.id.cmp(&b.id)));

        orders
            .into_iter()
            .map(|order| OrderExportRow {
                id: order.id,
                date: format_date(order.delivery_date, date_pattern),
                customer: order.customer.full_name(),
                total: order.total.to_decimal_string(),
                items: order.line_item_summary(),
            })
            .collect()
    }

    /// One row per expense, in date order
    pub fn expense_rows(&self, date_pattern: &str) -> Vec<ExpenseExportRow> {
        let mut expenses: Vec<_> = self.filtered_expenses.iter().collect();
        expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        expenses
            .into_iter()
            .map(|expense| ExpenseExportRow {
                id: expense.id,
                date: format_date(expense.date, date_pattern),
                description: expense.description.clone(),
                amount: expense.amount.to_decimal_string(),
            })
            .collect()
    }
}
