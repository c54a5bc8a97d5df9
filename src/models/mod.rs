//! Core data models for shopbooks
//!
//! This module contains the data structures the reporting engine reads:
//! orders, expenses, money, and the granularity used to bucket them.

pub mod expense;
pub mod granularity;
pub mod money;
pub mod order;
pub mod record;

pub use expense::Expense;
pub use granularity::{Granularity, PeriodKey};
pub use money::Money;
pub use order::{Customer, LineItem, Order};
pub use record::{parse_calendar_date, ExpenseRecord, MalformedRecord, OrderRecord};
