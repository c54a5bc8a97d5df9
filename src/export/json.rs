//! JSON Export functionality
//!
//! Writes the workbook as one pretty-printed JSON document.

use std::io::Write;

use super::Workbook;
use crate::error::{ShopError, ShopResult};

/// Export a workbook to JSON
pub fn export_workbook_json<W: Write>(workbook: &Workbook, writer: &mut W) -> ShopResult<()> {
    serde_json::to_writer_pretty(&mut *writer, workbook)
        .map_err(|e| ShopError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ShopError::Export(e.to_string()))?;
    Ok(())
}
