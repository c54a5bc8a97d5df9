//! shopbooks - financial reporting for a small made-to-order shop
//!
//! This library turns the shop's order book and expense ledger into a
//! finance report: paid, uncancelled orders are inflows, expenses are
//! outflows, and both are bucketed by day, month or year over an inclusive
//! date range.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, orders, expenses, raw records)
//! - `storage`: JSON snapshot storage and the [`storage::RecordSource`] contract
//! - `reports`: Filtering, aggregation, totals and export projections
//! - `export`: CSV, JSON and YAML workbook writers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use shopbooks::config::paths::ShopPaths;
//! use shopbooks::models::Granularity;
//! use shopbooks::reports::{DateRange, FinanceReport};
//! use shopbooks::storage::Storage;
//!
//! let storage = Storage::new(ShopPaths::new()?);
//! let report = FinanceReport::from_source(&storage, DateRange::new(from, to), Granularity::Month)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ShopError, ShopResult};
