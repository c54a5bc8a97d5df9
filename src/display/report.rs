//! Finance report formatting for terminal output
//!
//! Renders the period table, the optional detail listings and the
//! diagnostics that go with them.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::projection::format_date;
use crate::reports::{FinanceReport, TOTAL_LABEL};

#[derive(Tabled)]
struct PeriodLine {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Inflow")]
    inflow: String,
    #[tabled(rename = "Outflow")]
    outflow: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

impl PeriodLine {
    fn new(period: &str, inflow: Money, outflow: Money, currency: &str) -> Self {
        Self {
            period: period.to_string(),
            inflow: inflow.format_with_symbol(currency),
            outflow: outflow.format_with_symbol(currency),
            balance: (inflow - outflow).format_with_symbol(currency),
        }
    }
}

#[derive(Tabled)]
struct OrderLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Items")]
    items: String,
}

#[derive(Tabled)]
struct ExpenseLine {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Title line naming the range and grouping
pub fn format_report_title(report: &FinanceReport) -> String {
    format!(
        "Finance report {} to {} (by {})",
        report.range.from.format("%Y-%m-%d"),
        report.range.to.format("%Y-%m-%d"),
        report.granularity
    )
}

/// Format the period table with its grand-total line
///
/// A report without rows renders as an explicit empty state rather than a
/// table of zeros.
pub fn format_finance_report(report: &FinanceReport, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format_report_title(report));
    output.push('\n');

    if !report.has_activity() {
        output.push_str("No activity in range.\n");
        if report.range.is_inverted() {
            output.push_str(&format!(
                "Note: the start date {} is after the end date {}.\n",
                report.range.from.format("%Y-%m-%d"),
                report.range.to.format("%Y-%m-%d")
            ));
        }
    } else {
        let lines: Vec<PeriodLine> = report
            .rows
            .iter()
            .map(|row| PeriodLine::new(row.period_key(), row.inflow, row.outflow, currency))
            .chain(std::iter::once(PeriodLine::new(
                TOTAL_LABEL,
                report.total_inflow,
                report.total_outflow,
                currency,
            )))
            .collect();

        let mut table = Table::new(lines);
        table
            .with(Style::psql())
            .modify(Columns::new(1..), Alignment::right());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    if let Some(note) = format_skipped_notice(report) {
        output.push_str(&note);
        output.push('\n');
    }

    output
}

/// One-line diagnostic about malformed records, if any were skipped
pub fn format_skipped_notice(report: &FinanceReport) -> Option<String> {
    let skipped = report.skipped;
    if skipped.is_empty() {
        return None;
    }
    Some(format!(
        "Skipped {} malformed record(s): {} order(s), {} expense(s).",
        skipped.total(),
        skipped.orders,
        skipped.expenses
    ))
}

/// Format the qualifying orders behind the report
pub fn format_order_details(report: &FinanceReport, currency: &str, date_pattern: &str) -> String {
    if report.filtered_orders.is_empty() {
        return "No paid orders in range.".to_string();
    }

    let mut orders: Vec<_> = report.filtered_orders.iter().collect();
    orders.sort_by(|a, b| a.delivery_date.cmp(&b.delivery_date).then(a.id.cmp(&b.id)));

    let lines: Vec<OrderLine> = orders
        .into_iter()
        .map(|order| OrderLine {
            id: order.id,
            date: format_date(order.delivery_date, date_pattern),
            customer: order.customer.full_name(),
            total: order.total.format_with_symbol(currency),
            items: order.line_item_summary(),
        })
        .collect();

    let mut table = Table::new(lines);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}

/// Format the expenses behind the report
pub fn format_expense_details(
    report: &FinanceReport,
    currency: &str,
    date_pattern: &str,
) -> String {
    if report.filtered_expenses.is_empty() {
        return "No expenses in range.".to_string();
    }

    let mut expenses: Vec<_> = report.filtered_expenses.iter().collect();
    expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let lines: Vec<ExpenseLine> = expenses
        .into_iter()
        .map(|expense| ExpenseLine {
            id: expense.id,
            date: format_date(expense.date, date_pattern),
            description: expense.description.clone(),
            amount: expense.amount.format_with_symbol(currency),
        })
        .collect();

    let mut table = Table::new(lines);
    table
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}
