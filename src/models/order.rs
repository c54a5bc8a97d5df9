//! Order model
//!
//! A customer order as delivered by the record collaborator. Only the fields
//! the finance report and the business snapshot read are modelled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The customer an order belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", skipping whichever half is blank
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{} {}", first, last),
            (false, true) => first.to_string(),
            (true, false) => last.to_string(),
            (true, true) => String::new(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// One product line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity ordered (may be fractional, e.g. kilograms)
    pub quantity: f64,

    /// Product name at the time of the order
    pub product_name: String,

    /// Selected options (fillings, toppings, extras)
    #[serde(default)]
    pub options: Vec<String>,
}

impl LineItem {
    /// Create a line item without options
    pub fn new(quantity: f64, product_name: impl Into<String>) -> Self {
        Self {
            quantity,
            product_name: product_name.into(),
            options: Vec::new(),
        }
    }

    /// Create a line item with selected options
    pub fn with_options(
        quantity: f64,
        product_name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            quantity,
            product_name: product_name.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.product_name)?;
        if !self.options.is_empty() {
            write!(f, " ({})", self.options.join(", "))?;
        }
        Ok(())
    }
}

/// A validated customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier assigned by the record store
    pub id: i64,

    /// Delivery date; the attribution date for revenue
    pub delivery_date: NaiveDate,

    /// Order total (non-negative)
    pub total: Money,

    /// Cancelled orders never count as revenue
    #[serde(default)]
    pub cancelled: bool,

    /// Unpaid orders never count as realized revenue
    #[serde(default)]
    pub paid: bool,

    /// Whether the order has been handed over
    #[serde(default)]
    pub delivered: bool,

    /// Who placed the order
    #[serde(default)]
    pub customer: Customer,

    /// Ordered products
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Create a new open (unpaid, not cancelled, not delivered) order
    pub fn new(id: i64, delivery_date: NaiveDate, total: Money) -> Self {
        Self {
            id,
            delivery_date,
            total,
            cancelled: false,
            paid: false,
            delivered: false,
            customer: Customer::default(),
            line_items: Vec::new(),
            notes: None,
        }
    }

    /// Set the customer
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    /// Append a line item
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// Whether this order counts as realized revenue
    pub fn is_qualifying(&self) -> bool {
        !self.cancelled && self.paid
    }

    /// Concatenated line-item summary, e.g. `2 x Cake (Chocolate); 1 x Brownie`
    pub fn line_item_summary(&self) -> String {
        self.line_items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
