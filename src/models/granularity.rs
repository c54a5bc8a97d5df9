//! Report granularity and period keys
//!
//! A granularity buckets calendar dates into days, months or years. Each
//! bucket is identified by a [`PeriodKey`], which pairs the display label with
//! the first day of the period so rows can be ordered chronologically.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Bucketing resolution for a finance report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One row per calendar day (`DD/MM/YYYY`)
    Day,
    /// One row per calendar month (`M/YYYY`)
    #[default]
    Month,
    /// One row per calendar year (`YYYY`)
    Year,
}

impl Granularity {
    /// First calendar day of the period containing `date`
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::Day => Some(date),
            Self::Month => date.with_day(1),
            Self::Year => date.with_ordinal(1),
        };
        // Day 1 and ordinal 1 exist for every month and year
        start.unwrap_or(date)
    }

    /// Display label of the period containing `date`
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            Self::Day => date.format("%d/%m/%Y").to_string(),
            Self::Month => format!("{}/{}", date.month(), date.format("%Y")),
            Self::Year => date.format("%Y").to_string(),
        }
    }

    /// Derive the period key for a calendar date
    pub fn key_for(&self, date: NaiveDate) -> PeriodKey {
        PeriodKey {
            label: self.label(date),
            start: self.period_start(date),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// Label plus chronological anchor for one report bucket
///
/// Equality and ordering use the period start only; the label is a pure
/// function of the start under a fixed granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodKey {
    /// Display label (`05/03/2024`, `3/2024`, `2024`)
    pub label: String,
    /// First calendar day of the period
    pub start: NaiveDate,
}

impl PartialEq for PeriodKey {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for PeriodKey {}

impl Ord for PeriodKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl PartialOrd for PeriodKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_label_is_zero_padded() {
        assert_eq!(Granularity::Day.label(date(2024, 3, 5)), "05/03/2024");
        assert_eq!(Granularity::Day.label(date(2024, 12, 25)), "25/12/2024");
    }

    #[test]
    fn test_month_label_is_not_padded() {
        assert_eq!(Granularity::Month.label(date(2024, 3, 5)), "3/2024");
        assert_eq!(Granularity::Month.label(date(2024, 10, 31)), "10/2024");
    }

    #[test]
    fn test_year_label() {
        assert_eq!(Granularity::Year.label(date(2024, 7, 1)), "2024");
    }

    #[test]
    fn test_period_start() {
        let d = date(2024, 2, 29);
        assert_eq!(Granularity::Day.period_start(d), d);
        assert_eq!(Granularity::Month.period_start(d), date(2024, 2, 1));
        assert_eq!(Granularity::Year.period_start(d), date(2024, 1, 1));
    }

    #[test]
    fn test_same_period_same_key() {
        let a = Granularity::Month.key_for(date(2024, 3, 1));
        let b = Granularity::Month.key_for(date(2024, 3, 31));
        let c = Granularity::Month.key_for(date(2024, 4, 1));
        assert_eq!(a, b);
        assert_eq!(a.label, b.label);
        assert_ne!(a, c);
    }

    #[test]
    fn test_keys_order_chronologically_not_lexically() {
        let feb = Granularity::Month.key_for(date(2024, 2, 10));
        let oct = Granularity::Month.key_for(date(2024, 10, 10));
        assert!(feb < oct);
        // The labels themselves sort the other way round
        assert!(oct.label < feb.label);

        let late_jan = Granularity::Day.key_for(date(2024, 1, 30));
        let early_feb = Granularity::Day.key_for(date(2024, 2, 2));
        assert!(late_jan < early_feb);
        assert!(early_feb.label < late_jan.label);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Granularity::Year).unwrap();
        assert_eq!(json, "\"year\"");
    }
}
