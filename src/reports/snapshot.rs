//! Fetching and validating a record snapshot
//!
//! Both collections are fetched before anything is validated or aggregated,
//! so a failure on either side leaves nothing half-computed.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ShopResult;
use crate::models::{Expense, MalformedRecord, Order};
use crate::storage::RecordSource;

/// How many raw records were excluded as malformed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkippedRecords {
    pub orders: usize,
    pub expenses: usize,
}

impl SkippedRecords {
    /// Total skipped across both collections
    pub fn total(&self) -> usize {
        self.orders + self.expenses
    }

    /// Whether anything was skipped
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Validated orders and expenses from one fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSnapshot {
    pub orders: Vec<Order>,
    pub expenses: Vec<Expense>,
    pub skipped: SkippedRecords,
}

impl RecordSnapshot {
    /// Fetch both collections, then validate them
    ///
    /// # Errors
    ///
    /// Propagates the source's `DataUnavailable` error if either fetch fails.
    pub fn fetch<S: RecordSource + ?Sized>(source: &S) -> ShopResult<Self> {
        let order_records = source.fetch_all_orders()?;
        let expense_records = source.fetch_all_expenses()?;
        debug!(
            orders = order_records.len(),
            expenses = expense_records.len(),
            "fetched record snapshot"
        );

        let (orders, skipped_orders) = validate_all(order_records, "order");
        let (expenses, skipped_expenses) = validate_all(expense_records, "expense");

        Ok(Self {
            orders,
            expenses,
            skipped: SkippedRecords {
                orders: skipped_orders,
                expenses: skipped_expenses,
            },
        })
    }
}

/// Convert raw records, dropping and counting the malformed ones
fn validate_all<R, T>(records: Vec<R>, kind: &'static str) -> (Vec<T>, usize)
where
    T: TryFrom<R, Error = MalformedRecord>,
{
    let mut valid = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match T::try_from(record) {
            Ok(item) => valid.push(item),
            Err(reason) => {
                warn!(kind, id = reason.record_id(), %reason, "skipping malformed record");
                skipped += 1;
            }
        }
    }

    (valid, skipped)
}
