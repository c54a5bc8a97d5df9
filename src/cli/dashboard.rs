//! CLI command for the business snapshot

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::format_business_snapshot;
use crate::error::ShopResult;
use crate::reports::{BusinessSnapshot, RecordSnapshot};
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
) -> ShopResult<()> {
    let records = RecordSnapshot::fetch(storage)?;
    let snapshot = BusinessSnapshot::compute(&records.orders, today);

    print!(
        "{}",
        format_business_snapshot(&snapshot, &settings.currency_symbol)
    );
    if !records.skipped.is_empty() {
        println!(
            "Skipped {} malformed record(s).",
            records.skipped.total()
        );
    }

    Ok(())
}
