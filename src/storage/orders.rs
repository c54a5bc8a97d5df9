//! Order repository for JSON storage
//!
//! Reads and writes the order snapshot in orders.json. Every fetch re-reads
//! the file so callers always see the snapshot as it is on disk.

use std::path::PathBuf;

use crate::error::ShopError;
use crate::models::OrderRecord;

use super::file_io::{read_json_required, write_json_atomic};

/// Serializable order data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct OrderData {
    #[serde(default)]
    pub(crate) orders: Vec<OrderRecord>,
}

/// Repository for the order snapshot
pub struct OrderRepository {
    path: PathBuf,
}

impl OrderRepository {
    /// Create a new order repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read every order record from disk
    pub fn get_all(&self) -> Result<Vec<OrderRecord>, ShopError> {
        let file_data: OrderData = read_json_required(&self.path)?;
        Ok(file_data.orders)
    }

    /// Replace the snapshot with the given records
    pub fn replace_all(&self, orders: Vec<OrderRecord>) -> Result<(), ShopError> {
        write_json_atomic(&self.path, &OrderData { orders })
    }
}
