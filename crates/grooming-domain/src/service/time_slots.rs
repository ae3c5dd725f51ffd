//! Appointment time slots

use chrono::NaiveTime;
use serde_json::Value;

/// First bookable hour of the day
pub const FIRST_SLOT_HOUR: u32 = 9;
/// Last bookable hour of the day (inclusive)
pub const LAST_SLOT_HOUR: u32 = 18;

/// Hourly slots from 09:00 through 18:00
pub fn default_time_slots() -> Vec<String> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .map(|time| time.format("%H:%M").to_string())
        .collect()
}

/// Use externally supplied slots when they form a non-empty list
///
/// String entries are kept in order; anything else in the array is ignored.
/// A missing value, a non-array, or an array without strings yields
/// [`default_time_slots`].
pub fn time_slots_or_default(raw: Option<&Value>) -> Vec<String> {
    let slots: Vec<String> = raw
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if slots.is_empty() {
        default_time_slots()
    } else {
        slots
    }
}
