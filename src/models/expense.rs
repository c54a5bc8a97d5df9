//! Expense model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A validated business expense (an outflow)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the record store
    pub id: i64,

    /// Attribution date
    pub date: NaiveDate,

    /// What the money was spent on
    #[serde(default)]
    pub description: String,

    /// Amount spent (non-negative)
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(id: i64, date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
        }
    }
}
