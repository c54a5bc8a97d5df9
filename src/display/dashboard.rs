//! Business snapshot formatting

use crate::reports::BusinessSnapshot;

/// Format the dashboard view
pub fn format_business_snapshot(snapshot: &BusinessSnapshot, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Business snapshot for {}\n",
        snapshot.today.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "  Pending deliveries:  {}\n",
        snapshot.pending_deliveries
    ));
    output.push_str(&format!(
        "  Pending payments:    {}\n",
        snapshot.pending_payments
    ));
    output.push_str(&format!(
        "  Revenue this month:  {}\n",
        snapshot.revenue_this_month.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Best customer:       {}\n",
        snapshot.best_customer.as_deref().unwrap_or("-")
    ));

    output
}
