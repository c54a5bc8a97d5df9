//! YAML Export functionality
//!
//! Writes the workbook as a commented, human-readable YAML document.

use std::io::Write;

use super::Workbook;
use crate::error::{ShopError, ShopResult};

/// Export a workbook to YAML
pub fn export_workbook_yaml<W: Write>(workbook: &Workbook, writer: &mut W) -> ShopResult<()> {
    let header = [
        "# shopbooks Finance Report".to_string(),
        format!("# Range: {} to {}", workbook.range.from, workbook.range.to),
        format!("# Grouped by: {}", workbook.granularity),
        format!("# App Version: {}", workbook.app_version),
    ];
    for line in &header {
        writeln!(writer, "{}", line).map_err(|e| ShopError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| ShopError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, workbook)?;
    Ok(())
}
