//! CSV Export functionality
//!
//! Writes each workbook sheet to its own CSV file.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{create_export_file, Workbook};
use crate::error::{ShopError, ShopResult};
use crate::reports::{ExpenseExportRow, OrderExportRow, SummaryExportRow};

/// Write a header line followed by one record per row
pub fn write_sheet<W, R>(writer: W, headers: &[&str], rows: &[R]) -> ShopResult<()>
where
    W: Write,
    R: Serialize,
{
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer
        .flush()
        .map_err(|e| ShopError::Export(e.to_string()))?;

    Ok(())
}

/// Write the summary, orders and expenses sheets as `<stem>_<sheet>.csv`
pub fn export_workbook_csv(
    workbook: &Workbook,
    output_dir: &Path,
    stem: &str,
) -> ShopResult<Vec<PathBuf>> {
    let summary = output_dir.join(format!("{}_summary.csv", stem));
    write_sheet(
        create_export_file(&summary)?,
        &SummaryExportRow::HEADERS,
        &workbook.summary,
    )?;

    let orders = output_dir.join(format!("{}_orders.csv", stem));
    write_sheet(
        create_export_file(&orders)?,
        &OrderExportRow::HEADERS,
        &workbook.orders,
    )?;

    let expenses = output_dir.join(format!("{}_expenses.csv", stem));
    write_sheet(
        create_export_file(&expenses)?,
        &ExpenseExportRow::HEADERS,
        &workbook.expenses,
    )?;

    Ok(vec![summary, orders, expenses])
}
