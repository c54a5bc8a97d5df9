//! Export module for shopbooks
//!
//! Writes a finance report as a three-sheet workbook (summary, orders,
//! expenses) in one of several formats:
//! - CSV: one file per sheet (spreadsheet-compatible)
//! - JSON: a single machine-readable workbook document
//! - YAML: a single human-readable workbook document

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ShopError, ShopResult};
use crate::models::Granularity;
use crate::reports::{
    DateRange, ExpenseExportRow, FinanceReport, OrderExportRow, SummaryExportRow,
};

pub use self::csv::{export_workbook_csv, write_sheet};
pub use json::export_workbook_json;
pub use yaml::export_workbook_yaml;

/// Current workbook schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV files, one per sheet
    #[default]
    Csv,
    /// Single JSON workbook
    Json,
    /// Single YAML workbook (human-readable)
    Yaml,
}

impl ExportFormat {
    /// File extension used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A finance report flattened into export sheets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// Range the report covers
    pub range: DateRange,

    /// Bucketing resolution of the summary sheet
    pub granularity: Granularity,

    /// Period rows followed by the grand total
    pub summary: Vec<SummaryExportRow>,

    /// Qualifying orders in range
    pub orders: Vec<OrderExportRow>,

    /// Expenses in range
    pub expenses: Vec<ExpenseExportRow>,
}

impl Workbook {
    /// Project a report into sheets, formatting detail dates with `date_pattern`
    pub fn from_report(report: &FinanceReport, date_pattern: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            range: report.range,
            granularity: report.granularity,
            summary: report.summary_rows(),
            orders: report.order_rows(date_pattern),
            expenses: report.expense_rows(date_pattern),
        }
    }
}

/// Base file name shared by every file of one export: `finance_<from>_<to>`
pub fn workbook_file_stem(range: &DateRange) -> String {
    format!(
        "finance_{}_{}",
        range.from.format("%Y-%m-%d"),
        range.to.format("%Y-%m-%d")
    )
}

/// Create `path` for writing, wrapping failures as export errors
pub(crate) fn create_export_file(path: &Path) -> ShopResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        ShopError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Write `report` into `output_dir` and return the files written
pub fn export_report(
    report: &FinanceReport,
    date_pattern: &str,
    format: ExportFormat,
    output_dir: &Path,
) -> ShopResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| {
        ShopError::Export(format!(
            "Failed to create directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let workbook = Workbook::from_report(report, date_pattern);
    let stem = workbook_file_stem(&report.range);

    let written = match format {
        ExportFormat::Csv => export_workbook_csv(&workbook, output_dir, &stem)?,
        ExportFormat::Json => {
            let path = output_dir.join(format!("{}.json", stem));
            let mut writer = create_export_file(&path)?;
            export_workbook_json(&workbook, &mut writer)?;
            vec![path]
        }
        ExportFormat::Yaml => {
            let path = output_dir.join(format!("{}.yaml", stem));
            let mut writer = create_export_file(&path)?;
            export_workbook_yaml(&workbook, &mut writer)?;
            vec![path]
        }
    };

    info!(
        %format,
        files = written.len(),
        dir = %output_dir.display(),
        "finance report exported"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, Order};
    use crate::reports::build_report;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report() -> FinanceReport {
        let mut order = Order::new(1, date(2024, 3, 5), Money::from_units_cents(1000, 0));
        order.paid = true;
        let expense = Expense::new(1, date(2024, 3, 5), "Flour", Money::from_units_cents(200, 0));
        build_report(
            &[order],
            &[expense],
            date(2024, 3, 1),
            date(2024, 3, 31),
            Granularity::Day,
        )
    }

    #[test]
    fn test_default_format_is_csv() {
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_file_stem() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
        assert_eq!(workbook_file_stem(&range), "finance_2024-03-01_2024-03-31");
    }

    #[test]
    fn test_workbook_from_report() {
        let workbook = Workbook::from_report(&sample_report(), "%d/%m/%Y");
        assert_eq!(workbook.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(workbook.summary.len(), 2);
        assert_eq!(workbook.summary[0].period, "05/03/2024");
        assert_eq!(workbook.orders.len(), 1);
        assert_eq!(workbook.expenses[0].description, "Flour");
    }

    #[test]
    fn test_export_csv_writes_one_file_per_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("exports");

        let files = export_report(&sample_report(), "%d/%m/%Y", ExportFormat::Csv, &out).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.exists()));
        assert!(out.join("finance_2024-03-01_2024-03-31_summary.csv").exists());
    }

    #[test]
    fn test_export_json_and_yaml_write_single_file() {
        let temp_dir = TempDir::new().unwrap();

        let json = export_report(
            &sample_report(),
            "%d/%m/%Y",
            ExportFormat::Json,
            temp_dir.path(),
        )
        .unwrap();
        assert_eq!(json.len(), 1);
        assert!(json[0].ends_with("finance_2024-03-01_2024-03-31.json"));

        let yaml = export_report(
            &sample_report(),
            "%d/%m/%Y",
            ExportFormat::Yaml,
            temp_dir.path(),
        )
        .unwrap();
        assert_eq!(yaml.len(), 1);
        assert!(yaml[0].exists());
    }
}
