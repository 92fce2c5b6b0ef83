//! Plain-text rendering for CLI output

use application::{ExpiryAlert, ExpiryReading, ReminderPlan};
use domain::{ExpiryUrgency, InventoryRecord};
use serde::Serialize;

/// Pretty-printed JSON for `--json` output
pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn reading(reading: &ExpiryReading) -> String {
    format!(
        "Found:     {}\nPattern:   {}\nExpires:   {}\nDays left: {}",
        reading.candidate.text(),
        reading.candidate.kind(),
        reading.expiry,
        reading.days_left
    )
}

/// One inventory line: id, name, category, expiry, quantity and status
pub fn record_line(record: &InventoryRecord, urgency: ExpiryUrgency) -> String {
    format!(
        "{}  {:<24} {:<10} {}  x{:<3} {}",
        record.id,
        record.name,
        record.category.label(),
        record.expiry_date,
        record.quantity,
        urgency.status_text(record.days_left)
    )
}

pub fn alert_line(alert: &ExpiryAlert) -> String {
    format!("[{}] {}", alert.urgency, alert.message)
}

pub fn reminder(plan: &ReminderPlan) -> String {
    format!(
        "{}\nItem:     {}\nRemind:   {}\nExpires:  {}",
        plan.message, plan.item_id, plan.reminder_date, plan.expiry_date
    )
}
