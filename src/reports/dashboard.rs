//! Business Snapshot
//!
//! The headline figures shown on the home screen: what still has to be
//! delivered, what still has to be collected, this month's revenue and the
//! best customer so far.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Money, Order};

/// Headline figures computed from the order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessSnapshot {
    /// Day the snapshot was computed for
    pub today: NaiveDate,
    /// Open orders (not cancelled, paid or delivered) due today or later
    pub pending_deliveries: usize,
    /// Uncancelled orders that have not been paid
    pub pending_payments: usize,
    /// Revenue from qualifying orders delivered in `today`'s month
    pub revenue_this_month: Money,
    /// Customer with the highest qualifying revenue, if any
    pub best_customer: Option<String>,
}

impl BusinessSnapshot {
    /// Compute the snapshot as of `today`
    pub fn compute(orders: &[Order], today: NaiveDate) -> Self {
        let pending_deliveries = orders
            .iter()
            .filter(|o| !o.cancelled && !o.paid && !o.delivered && o.delivery_date >= today)
            .count();

        let pending_payments = orders.iter().filter(|o| !o.cancelled && !o.paid).count();

        let revenue_this_month = orders
            .iter()
            .filter(|o| o.is_qualifying())
            .filter(|o| {
                o.delivery_date.year() == today.year() && o.delivery_date.month() == today.month()
            })
            .map(|o| o.total)
            .sum();

        Self {
            today,
            pending_deliveries,
            pending_payments,
            revenue_this_month,
            best_customer: best_customer(orders),
        }
    }
}

/// Name with the largest qualifying revenue; ties go to the name that sorts first
fn best_customer(orders: &[Order]) -> Option<String> {
    let mut revenue_by_customer: BTreeMap<String, Money> = BTreeMap::new();
    for order in orders.iter().filter(|o| o.is_qualifying()) {
        *revenue_by_customer
            .entry(order.customer.full_name())
            .or_default() += order.total;
    }

    let mut best: Option<(String, Money)> = None;
    for (name, total) in revenue_by_customer {
        if !total.is_positive() {
            continue;
        }
        match &best {
            Some((_, best_total)) if total <= *best_total => {}
            _ => best = Some((name, total)),
        }
    }
    best.map(|(name, _)| name)
}
