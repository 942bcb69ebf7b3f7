//! Date delta engine.

use crate::time::calendar::Calendar;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Magnitude and direction of the distance to a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaResult {
    /// Absolute whole-day count.
    pub days: u64,
    /// `true` only when the target lies at least one whole day ahead.
    pub is_in_future: bool,
}

/// Counts whole calendar days from `now` to `target`.
///
/// A calendar that cannot produce a day count yields `0` days in the past
/// rather than an error.
pub fn days_since(
    calendar: &impl Calendar,
    now: DateTime<Utc>,
    target: DateTime<Utc>,
) -> DeltaResult {
    let signed_days = calendar
        .whole_days_between(now, target)
        .unwrap_or_else(|| {
            debug!("event=delta_fallback module=engine status=degraded days=0");
            0
        });

    DeltaResult {
        days: signed_days.unsigned_abs(),
        is_in_future: signed_days > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{days_since, DeltaResult};
    use crate::time::calendar::{Calendar, ZonedCalendar};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    struct BlindCalendar;

    impl Calendar for BlindCalendar {
        fn whole_days_between(&self, _from: DateTime<Utc>, _to: DateTime<Utc>) -> Option<i64> {
            None
        }

        fn add_years(&self, _instant: DateTime<Utc>, _years: i32) -> Option<DateTime<Utc>> {
            None
        }

        fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
            instant.date_naive()
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn past_target_reports_magnitude_without_future_flag() {
        let result = days_since(&ZonedCalendar::utc(), ymd(2024, 1, 10), ymd(2024, 1, 1));
        assert_eq!(
            result,
            DeltaResult {
                days: 9,
                is_in_future: false
            }
        );
    }

    #[test]
    fn next_day_is_one_day_in_future() {
        let result = days_since(&ZonedCalendar::utc(), ymd(2024, 1, 10), ymd(2024, 1, 11));
        assert_eq!(
            result,
            DeltaResult {
                days: 1,
                is_in_future: true
            }
        );
    }

    #[test]
    fn same_instant_is_zero_and_not_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 0).unwrap();
        let result = days_since(&ZonedCalendar::utc(), now, now);
        assert_eq!(result.days, 0);
        assert!(!result.is_in_future);
    }

    #[test]
    fn later_same_day_is_not_future() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        let result = days_since(&ZonedCalendar::utc(), now, later);
        assert_eq!(result.days, 0);
        assert!(!result.is_in_future);
    }

    #[test]
    fn magnitude_is_direction_independent() {
        let calendar = ZonedCalendar::from_name("Europe/Berlin").unwrap();
        let pairs = [
            (ymd(2024, 1, 10), ymd(1999, 12, 31)),
            (ymd(2024, 1, 10), ymd(2080, 2, 29)),
            (
                Utc.with_ymd_and_hms(2024, 3, 30, 21, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 11, 2, 4, 30, 0).unwrap(),
            ),
        ];

        for (a, b) in pairs {
            assert_eq!(
                days_since(&calendar, a, b).days,
                days_since(&calendar, b, a).days,
                "asymmetric for {a} / {b}"
            );
        }
    }

    #[test]
    fn spans_leap_years_with_calendar_days() {
        let result = days_since(&ZonedCalendar::utc(), ymd(2020, 1, 1), ymd(2025, 1, 1));
        assert_eq!(result.days, 366 * 2 + 365 * 3);
        assert!(result.is_in_future);
    }

    #[test]
    fn far_past_and_far_future_targets_are_supported() {
        let calendar = ZonedCalendar::utc();
        let now = ymd(2024, 1, 10);

        let ancient = days_since(&calendar, now, ymd(-3000, 1, 1));
        assert!(!ancient.is_in_future);
        assert!(ancient.days > 1_000_000);

        let distant = days_since(&calendar, now, ymd(9000, 1, 1));
        assert!(distant.is_in_future);
        assert!(distant.days > 2_500_000);
    }

    #[test]
    fn missing_day_component_degrades_to_zero() {
        let result = days_since(&BlindCalendar, ymd(2024, 1, 10), ymd(2030, 1, 1));
        assert_eq!(
            result,
            DeltaResult {
                days: 0,
                is_in_future: false
            }
        );
    }
}
