//! Storage initialization
//!
//! Handles first-run setup: directories plus empty order and expense
//! snapshots, so a fresh install reports "no activity" instead of failing.

use crate::config::paths::ShopPaths;
use crate::error::ShopError;

use super::expenses::ExpenseData;
use super::file_io::write_json_atomic;
use super::orders::OrderData;

/// Initialize storage for a fresh installation
///
/// Existing snapshots are left untouched.
pub fn initialize_storage(paths: &ShopPaths) -> Result<(), ShopError> {
    paths.ensure_directories()?;

    if !paths.orders_file().exists() {
        write_json_atomic(paths.orders_file(), &OrderData::default())?;
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(paths.expenses_file(), &ExpenseData::default())?;
    }

    Ok(())
}
