//! Raw records as delivered by the record collaborator
//!
//! The collaborator's payloads are loosely typed: dates arrive as strings
//! (sometimes with a time-of-day part) and amounts as whatever JSON value the
//! backend produced. Conversion into [`Order`] / [`Expense`] validates both
//! and reports a [`MalformedRecord`] instead of guessing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::expense::Expense;
use super::money::Money;
use super::order::{Customer, LineItem, Order};

/// Why a raw record was excluded from aggregation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("record {id} has no attribution date")]
    MissingDate { id: i64 },

    #[error("record {id} has an unreadable date: {value}")]
    InvalidDate { id: i64, value: String },

    #[error("record {id} has no amount")]
    MissingAmount { id: i64 },

    #[error("record {id} has a non-numeric amount: {value}")]
    NonNumericAmount { id: i64, value: String },

    #[error("record {id} has a negative amount: {amount}")]
    NegativeAmount { id: i64, amount: Money },

    #[error("record {id} has an amount above the per-record ceiling: {amount}")]
    AmountTooLarge { id: i64, amount: Money },
}

/// Largest amount a single record may carry (one billion currency units)
///
/// Any report over fewer than ninety million records stays within `i64`
/// cents when every record respects this ceiling.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

impl MalformedRecord {
    /// Identifier of the offending record
    pub fn record_id(&self) -> i64 {
        match self {
            Self::MissingDate { id }
            | Self::InvalidDate { id, .. }
            | Self::MissingAmount { id }
            | Self::NonNumericAmount { id, .. }
            | Self::NegativeAmount { id, .. }
            | Self::AmountTooLarge { id, .. } => *id,
        }
    }
}

/// Parse a date-only value as a calendar date.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a `T` or space and a
/// time-of-day part which is discarded. No timezone conversion is applied, so
/// `2024-03-15T23:30:00-03:00` is still the 15th.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10)?;
    match value.as_bytes().get(10) {
        None | Some(b'T') | Some(b' ') => {}
        Some(_) => return None,
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_date(id: i64, value: Option<&str>) -> Result<NaiveDate, MalformedRecord> {
    let value = value
        .filter(|v| !v.trim().is_empty())
        .ok_or(MalformedRecord::MissingDate { id })?;
    parse_calendar_date(value).ok_or_else(|| MalformedRecord::InvalidDate {
        id,
        value: value.to_string(),
    })
}

fn parse_amount(id: i64, value: Option<&Value>) -> Result<Money, MalformedRecord> {
    let non_numeric = |v: &Value| MalformedRecord::NonNumericAmount {
        id,
        value: v.to_string(),
    };

    let value = value
        .filter(|v| !v.is_null())
        .ok_or(MalformedRecord::MissingAmount { id })?;

    let amount = match value {
        Value::Number(n) => Money::parse(&n.to_string()),
        Value::String(s) => Money::parse(s),
        other => return Err(non_numeric(other)),
    }
    .map_err(|_| non_numeric(value))?;

    if amount.is_negative() {
        return Err(MalformedRecord::NegativeAmount { id, amount });
    }
    if amount > MAX_AMOUNT {
        return Err(MalformedRecord::AmountTooLarge { id, amount });
    }
    Ok(amount)
}

/// Read one stored line item; `None` when it cannot be shown
///
/// Quantities may be numbers or numeric strings. Options that are not
/// strings are ignored.
fn parse_line_item(value: &Value) -> Option<LineItem> {
    let quantity = match value.get("quantity")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !quantity.is_finite() || quantity < 0.0 {
        return None;
    }

    let product_name = value.get("product_name")?.as_str()?.trim();
    if product_name.is_empty() {
        return None;
    }

    let options: Vec<String> = match value.get("options") {
        Some(Value::Array(options)) => options
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    Some(LineItem::with_options(quantity, product_name, options))
}

/// Line items only feed export detail, so a bad one is dropped on its own
/// and never excludes the order from the totals.
fn parse_line_items(id: i64, value: Option<&Value>) -> Vec<LineItem> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let parsed = parse_line_item(item);
                if parsed.is_none() {
                    warn!(id, %item, "dropping unreadable line item");
                }
                parsed
            })
            .collect(),
        Some(other) => {
            warn!(id, value = %other, "ignoring line items that are not a list");
            Vec::new()
        }
    }
}

/// An order as fetched from the record store, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,

    #[serde(default)]
    pub delivery_date: Option<String>,

    #[serde(default)]
    pub total: Option<Value>,

    #[serde(default)]
    pub cancelled: bool,

    #[serde(default)]
    pub paid: bool,

    #[serde(default)]
    pub delivered: bool,

    #[serde(default)]
    pub customer: Customer,

    /// Line items exactly as stored; unreadable entries are dropped on conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = MalformedRecord;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let delivery_date = parse_date(record.id, record.delivery_date.as_deref())?;
        let total = parse_amount(record.id, record.total.as_ref())?;
        let line_items = parse_line_items(record.id, record.line_items.as_ref());

        Ok(Order {
            id: record.id,
            delivery_date,
            total,
            cancelled: record.cancelled,
            paid: record.paid,
            delivered: record.delivered,
            customer: record.customer,
            line_items,
            notes: record.notes,
        })
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            delivery_date: Some(order.delivery_date.format("%Y-%m-%d").to_string()),
            total: Some(Value::String(order.total.to_decimal_string())),
            cancelled: order.cancelled,
            paid: order.paid,
            delivered: order.delivered,
            customer: order.customer.clone(),
            line_items: serde_json::to_value(&order.line_items).ok(),
            notes: order.notes.clone(),
        }
    }
}

/// An expense as fetched from the record store, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub amount: Option<Value>,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = MalformedRecord;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        let date = parse_date(record.id, record.date.as_deref())?;
        let amount = parse_amount(record.id, record.amount.as_ref())?;

        Ok(Expense {
            id: record.id,
            date,
            description: record.description,
            amount,
        })
    }
}

impl From<&Expense> for ExpenseRecord {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            date: Some(expense.date.format("%Y-%m-%d").to_string()),
            description: expense.description.clone(),
            amount: Some(Value::String(expense.amount.to_decimal_string())),
        }
    }
}
