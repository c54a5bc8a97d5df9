//! Period aggregation
//!
//! Buckets filtered orders and expenses by period key and sums them.

use std::collections::BTreeMap;

use crate::models::{Expense, Granularity, Money, Order, PeriodKey};

/// One period of a finance report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// The period this row covers
    pub period: PeriodKey,
    /// Sum of qualifying order totals in the period
    pub inflow: Money,
    /// Sum of expense amounts in the period
    pub outflow: Money,
}

impl ReportRow {
    fn empty(period: PeriodKey) -> Self {
        Self {
            period,
            inflow: Money::zero(),
            outflow: Money::zero(),
        }
    }

    /// Display label of the period
    pub fn period_key(&self) -> &str {
        &self.period.label
    }

    /// Inflow minus outflow
    pub fn balance(&self) -> Money {
        self.inflow - self.outflow
    }
}

/// Sum orders into inflow and expenses into outflow per period.
///
/// Callers pass already-filtered records; no qualification check happens
/// here. Periods nobody touched are absent. Rows come back ordered by period
/// start.
pub fn aggregate(orders: &[Order], expenses: &[Expense], granularity: Granularity) -> Vec<ReportRow> {
    let mut buckets: BTreeMap<PeriodKey, ReportRow> = BTreeMap::new();

    for order in orders {
        let key = granularity.key_for(order.delivery_date);
        buckets
            .entry(key.clone())
            .or_insert_with(|| ReportRow::empty(key))
            .inflow += order.total;
    }

    for expense in expenses {
        let key = granularity.key_for(expense.date);
        buckets
            .entry(key.clone())
            .or_insert_with(|| ReportRow::empty(key))
            .outflow += expense.amount;
    }

    buckets.into_values().collect()
}
