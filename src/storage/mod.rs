//! Storage layer for shopbooks
//!
//! The reporting engine only needs two things from the outside world: every
//! order and every expense. [`RecordSource`] is that contract; [`Storage`]
//! fulfils it from JSON snapshots on disk.

pub mod expenses;
pub mod file_io;
pub mod init;
pub mod orders;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json_required, write_json_atomic};
pub use init::initialize_storage;
pub use orders::OrderRepository;

use crate::config::paths::ShopPaths;
use crate::error::{ShopError, ShopResult};
use crate::models::{ExpenseRecord, OrderRecord};

/// A collaborator that can deliver full order and expense collections
///
/// Implementations report any failure as [`ShopError::DataUnavailable`] so
/// callers can tell "no data" from "could not get data".
pub trait RecordSource {
    /// Fetch every order
    fn fetch_all_orders(&self) -> ShopResult<Vec<OrderRecord>>;

    /// Fetch every expense
    fn fetch_all_expenses(&self) -> ShopResult<Vec<ExpenseRecord>>;
}

/// Main storage coordinator that provides access to the snapshots
pub struct Storage {
    paths: ShopPaths,
    pub orders: OrderRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ShopPaths) -> Self {
        Self {
            orders: OrderRepository::new(paths.orders_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ShopPaths {
        &self.paths
    }
}

impl RecordSource for Storage {
    fn fetch_all_orders(&self) -> ShopResult<Vec<OrderRecord>> {
        self.orders
            .get_all()
            .map_err(|e| ShopError::orders_unavailable(e.to_string()))
    }

    fn fetch_all_expenses(&self) -> ShopResult<Vec<ExpenseRecord>> {
        self.expenses
            .get_all()
            .map_err(|e| ShopError::expenses_unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_from_initialized_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let storage = Storage::new(paths);
        assert!(storage.fetch_all_orders().unwrap().is_empty());
        assert!(storage.fetch_all_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_fetch_failure_is_data_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths);

        let err = storage.fetch_all_orders().unwrap_err();
        assert!(err.is_data_unavailable());
        assert!(err.to_string().starts_with("Orders unavailable"));

        let err = storage.fetch_all_expenses().unwrap_err();
        assert!(err.is_data_unavailable());
    }
}
