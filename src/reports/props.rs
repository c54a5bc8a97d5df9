//! Property-based tests for the finance report.
//!
//! - Cancelled and unpaid orders never reach inflow
//! - Balances are exact differences, per row and overall
//! - Row sums reconcile with the grand totals
//! - Rows are strictly chronological and never zero-filled
//! - Generation is a pure function of its inputs

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::filter::DateRange;
use super::finance::FinanceReport;
use crate::models::{Expense, Granularity, Money, Order};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

/// Dates spread over roughly three years so every granularity gets several buckets.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..1100).prop_map(|offset| base_date() + Duration::days(offset))
}

fn any_amount() -> impl Strategy<Value = Money> {
    (0i64..10_000_000).prop_map(Money::from_cents)
}

fn any_order() -> impl Strategy<Value = Order> {
    (
        1i64..10_000,
        any_date(),
        any_amount(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, date, total, paid, cancelled)| {
            let mut order = Order::new(id, date, total);
            order.paid = paid;
            order.cancelled = cancelled;
            order
        })
}

fn any_expense() -> impl Strategy<Value = Expense> {
    (1i64..10_000, any_date(), any_amount())
        .prop_map(|(id, date, amount)| Expense::new(id, date, "expense", amount))
}

fn any_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

fn any_range() -> impl Strategy<Value = DateRange> {
    (any_date(), any_date()).prop_map(|(from, to)| DateRange::new(from, to))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_non_qualifying_orders_never_count(
        orders in prop::collection::vec(any_order(), 0..40),
        range in any_range(),
        granularity in any_granularity(),
    ) {
        let report = FinanceReport::generate(&orders, &[], range, granularity);

        let expected: Money = orders
            .iter()
            .filter(|o| o.paid && !o.cancelled && range.contains(o.delivery_date))
            .map(|o| o.total)
            .sum();

        prop_assert_eq!(report.total_inflow, expected);
        prop_assert!(report.filtered_orders.iter().all(|o| o.paid && !o.cancelled));
    }

    #[test]
    fn prop_balances_are_exact(
        orders in prop::collection::vec(any_order(), 0..40),
        expenses in prop::collection::vec(any_expense(), 0..40),
        range in any_range(),
        granularity in any_granularity(),
    ) {
        let report = FinanceReport::generate(&orders, &expenses, range, granularity);

        prop_assert_eq!(report.balance(), report.total_inflow - report.total_outflow);
        for row in &report.rows {
            prop_assert_eq!(row.balance(), row.inflow - row.outflow);
        }

        let row_inflow: Money = report.rows.iter().map(|r| r.inflow).sum();
        let row_outflow: Money = report.rows.iter().map(|r| r.outflow).sum();
        prop_assert_eq!(row_inflow, report.total_inflow);
        prop_assert_eq!(row_outflow, report.total_outflow);
    }

    #[test]
    fn prop_rows_are_chronological_and_touched(
        orders in prop::collection::vec(any_order(), 0..40),
        expenses in prop::collection::vec(any_expense(), 0..40),
        range in any_range(),
        granularity in any_granularity(),
    ) {
        let report = FinanceReport::generate(&orders, &expenses, range, granularity);

        for pair in report.rows.windows(2) {
            prop_assert!(pair[0].period.start < pair[1].period.start);
        }

        let touched: std::collections::BTreeSet<NaiveDate> = report
            .filtered_orders
            .iter()
            .map(|o| granularity.period_start(o.delivery_date))
            .chain(report.filtered_expenses.iter().map(|e| granularity.period_start(e.date)))
            .collect();
        let present: std::collections::BTreeSet<NaiveDate> =
            report.rows.iter().map(|r| r.period.start).collect();
        prop_assert_eq!(touched, present);
    }

    #[test]
    fn prop_inverted_range_is_empty(
        orders in prop::collection::vec(any_order(), 0..20),
        expenses in prop::collection::vec(any_expense(), 0..20),
        from in any_date(),
        gap in 1i64..400,
        granularity in any_granularity(),
    ) {
        let range = DateRange::new(from, from - Duration::days(gap));
        let report = FinanceReport::generate(&orders, &expenses, range, granularity);

        prop_assert!(report.rows.is_empty());
        prop_assert_eq!(report.total_inflow, Money::zero());
        prop_assert_eq!(report.total_outflow, Money::zero());
    }

    #[test]
    fn prop_generation_is_idempotent(
        orders in prop::collection::vec(any_order(), 0..30),
        expenses in prop::collection::vec(any_expense(), 0..30),
        range in any_range(),
        granularity in any_granularity(),
    ) {
        let first = FinanceReport::generate(&orders, &expenses, range, granularity);
        let second = FinanceReport::generate(&orders, &expenses, range, granularity);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_period_key_is_stable_within_period(
        date in any_date(),
        granularity in any_granularity(),
    ) {
        let key = granularity.key_for(date);
        let start_key = granularity.key_for(key.start);
        prop_assert_eq!(&key.label, &start_key.label);
        prop_assert_eq!(key.start, start_key.start);
    }
}
