//! Expense repository for JSON storage
//!
//! Reads and writes the expense snapshot in expenses.json.

use std::path::PathBuf;

use crate::error::ShopError;
use crate::models::ExpenseRecord;

use super::file_io::{read_json_required, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct ExpenseData {
    #[serde(default)]
    pub(crate) expenses: Vec<ExpenseRecord>,
}

/// Repository for the expense snapshot
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read every expense record from disk
    pub fn get_all(&self) -> Result<Vec<ExpenseRecord>, ShopError> {
        let file_data: ExpenseData = read_json_required(&self.path)?;
        Ok(file_data.expenses)
    }

    /// Replace the snapshot with the given records
    pub fn replace_all(&self, expenses: Vec<ExpenseRecord>) -> Result<(), ShopError> {
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }
}
