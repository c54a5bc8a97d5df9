//! CLI commands for reports
//!
//! Shows the finance report in the terminal or exports it as a workbook.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_expense_details, format_finance_report, format_order_details, format_report_title,
    format_skipped_notice,
};
use crate::error::{ShopError, ShopResult};
use crate::export::{export_report, ExportFormat};
use crate::models::Granularity;
use crate::reports::{DateRange, FinanceReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show inflows vs. outflows for a date range
    Show {
        /// Start date (YYYY-MM-DD), defaults to the first of this month
        #[arg(short, long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        to: Option<String>,

        /// Group rows by day, month or year
        #[arg(short, long, value_enum)]
        by: Option<Granularity>,

        /// Also list the orders and expenses behind the totals
        #[arg(long)]
        detail: bool,
    },

    /// Export the report as summary, orders and expenses sheets
    Export {
        /// Start date (YYYY-MM-DD), defaults to the first of this month
        #[arg(short, long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        to: Option<String>,

        /// Group summary rows by day, month or year
        #[arg(short, long, value_enum)]
        by: Option<Granularity>,

        /// Export format
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output directory, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
    today: NaiveDate,
) -> ShopResult<()> {
    match cmd {
        ReportCommands::Show {
            from,
            to,
            by,
            detail,
        } => {
            let range = resolve_range(from.as_deref(), to.as_deref(), today)?;
            let granularity = by.unwrap_or(settings.default_granularity);
            handle_show(storage, settings, range, granularity, detail)
        }
        ReportCommands::Export {
            from,
            to,
            by,
            format,
            output,
        } => {
            let range = resolve_range(from.as_deref(), to.as_deref(), today)?;
            let granularity = by.unwrap_or(settings.default_granularity);
            let format = format.unwrap_or(settings.default_export_format);
            let output = output.unwrap_or_else(|| storage.paths().exports_dir());
            handle_export(storage, settings, range, granularity, format, output)
        }
    }
}

fn handle_show(
    storage: &Storage,
    settings: &Settings,
    range: DateRange,
    granularity: Granularity,
    detail: bool,
) -> ShopResult<()> {
    let report = FinanceReport::from_source(storage, range, granularity)?;

    print!("{}", format_finance_report(&report, &settings.currency_symbol));

    if detail {
        println!();
        println!("Orders");
        println!(
            "{}",
            format_order_details(&report, &settings.currency_symbol, &settings.date_format)
        );
        println!();
        println!("Expenses");
        println!(
            "{}",
            format_expense_details(&report, &settings.currency_symbol, &settings.date_format)
        );
    }

    Ok(())
}

fn handle_export(
    storage: &Storage,
    settings: &Settings,
    range: DateRange,
    granularity: Granularity,
    format: ExportFormat,
    output: PathBuf,
) -> ShopResult<()> {
    let report = FinanceReport::from_source(storage, range, granularity)?;
    let files = export_report(&report, &settings.date_format, format, &output)?;

    println!("{}", format_report_title(&report));
    if !report.has_activity() {
        println!("No activity in range; exported an empty workbook.");
    }
    if let Some(note) = format_skipped_notice(&report) {
        println!("{}", note);
    }
    println!("Exported {} file(s) to: {}", files.len(), output.display());
    for file in &files {
        println!("  {}", file.display());
    }

    Ok(())
}

/// Parse a YYYY-MM-DD command-line date
fn parse_date_arg(value: &str, flag: &str) -> ShopResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ShopError::Validation(format!(
            "Invalid {} date: '{}'. Use YYYY-MM-DD format.",
            flag, value
        ))
    })
}

/// Resolve optional `--from`/`--to` flags against month-to-date defaults
fn resolve_range(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> ShopResult<DateRange> {
    let default = DateRange::month_to_date(today);
    let from = match from {
        Some(s) => parse_date_arg(s, "--from")?,
        None => default.from,
    };
    let to = match to {
        Some(s) => parse_date_arg(s, "--to")?,
        None => default.to,
    };
    Ok(DateRange::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_month_to_date() {
        let range = resolve_range(None, None, date(2024, 3, 15)).unwrap();
        assert_eq!(range, DateRange::new(date(2024, 3, 1), date(2024, 3, 15)));
    }

    #[test]
    fn test_explicit_range() {
        let range = resolve_range(Some("2024-01-01"), Some("2024-12-31"), date(2024, 3, 15)).unwrap();
        assert_eq!(range.from, date(2024, 1, 1));
        assert_eq!(range.to, date(2024, 12, 31));
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let range = resolve_range(Some("2024-04-01"), Some("2024-03-01"), date(2024, 3, 15)).unwrap();
        assert!(range.is_inverted());
    }

    #[test]
    fn test_bad_date_is_validation_error() {
        let err = resolve_range(Some("03/01/2024"), None, date(2024, 3, 15)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("--from"));
    }
}
