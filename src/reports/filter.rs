//! Date-range filtering
//!
//! Selects the orders and expenses a finance report covers. Ranges are
//! inclusive on both ends and compared on calendar dates, so a record dated on
//! the `to` day is always inside, whatever its original time of day was.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Expense, Order};

/// An inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day covered
    pub from: NaiveDate,
    /// Last day covered
    pub to: NaiveDate,
}

impl DateRange {
    /// Create a range; an inverted range is allowed and simply covers nothing
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// From the first day of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            from: today.with_day(1).unwrap_or(today),
            to: today,
        }
    }

    /// Whether `from` lies after `to`
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Whether `date` lies within the range, boundaries included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.from.format("%Y-%m-%d"),
            self.to.format("%Y-%m-%d")
        )
    }
}

/// Qualifying orders (paid, not cancelled) delivered within `range`
pub fn filter_orders(orders: &[Order], range: &DateRange) -> Vec<Order> {
    if range.is_inverted() {
        return Vec::new();
    }

    orders
        .iter()
        .filter(|o| o.is_qualifying() && range.contains(o.delivery_date))
        .cloned()
        .collect()
}

/// Expenses dated within `range`
pub fn filter_expenses(expenses: &[Expense], range: &DateRange) -> Vec<Expense> {
    if range.is_inverted() {
        return Vec::new();
    }

    expenses
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}
