//! Threshold gate for the hidden developer console.

use crate::time::calendar::Calendar;
use chrono::{DateTime, Utc};
use log::debug;

/// Years ahead of "now" a target must exceed to unlock the console.
pub const FAR_FUTURE_YEARS: i32 = 30;

/// Returns `true` when `target` lies strictly after `now + 30 years`.
///
/// An unrepresentable limit keeps the console hidden.
pub fn is_far_in_future(
    calendar: &impl Calendar,
    now: DateTime<Utc>,
    target: DateTime<Utc>,
) -> bool {
    match calendar.add_years(now, FAR_FUTURE_YEARS) {
        Some(future_limit) => target > future_limit,
        None => {
            debug!("event=gate_fallback module=engine status=degraded unlocked=false");
            false
        }
    }
}
