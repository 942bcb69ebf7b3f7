//! Calendar abstraction for day counting and year addition.
//!
//! # Responsibility
//! - Count whole calendar days between two instants.
//! - Add calendar years to an instant.
//!
//! # Invariants
//! - Both operations work on local wall-clock time of the calendar's zone, so
//!   a 23h or 25h DST day still counts as one day.
//! - Day counts truncate toward zero: a partial day is not counted.
//! - Year addition clamps 29 February to 28 February in non-leap years.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Calendar capability consumed by the delta engine and the threshold gate.
///
/// Both methods return `Option` so that calendars which cannot represent a
/// result can say so; callers decide how to degrade.
pub trait Calendar {
    /// Signed number of whole calendar days from `from` to `to`.
    fn whole_days_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<i64>;

    /// Returns `instant` shifted by `years` calendar years.
    fn add_years(&self, instant: DateTime<Utc>, years: i32) -> Option<DateTime<Utc>>;

    /// Calendar date `instant` falls on, as shown to the user.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate;
}

impl<K: Calendar + ?Sized> Calendar for &K {
    fn whole_days_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<i64> {
        (**self).whole_days_between(from, to)
    }

    fn add_years(&self, instant: DateTime<Utc>, years: i32) -> Option<DateTime<Utc>> {
        (**self).add_years(instant, years)
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        (**self).local_date(instant)
    }
}

/// Error returned when an IANA zone name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeZone(pub String);

impl Display for UnknownTimeZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown time zone `{}`", self.0)
    }
}

impl Error for UnknownTimeZone {}

/// Gregorian calendar evaluated in one IANA time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedCalendar {
    tz: Tz,
}

impl ZonedCalendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    /// Resolves an IANA name such as `"Europe/Berlin"`.
    pub fn from_name(name: &str) -> Result<Self, UnknownTimeZone> {
        let trimmed = name.trim();
        trimmed
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| UnknownTimeZone(trimmed.to_string()))
    }

    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// First instant of `date` in this zone.
    pub fn start_of_day(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        self.resolve_local(date.and_time(NaiveTime::MIN))
    }

    fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    // Ambiguous wall-clock times take the earlier offset; times inside a DST
    // gap move forward by one hour.
    fn resolve_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.tz
            .from_local_datetime(&local)
            .earliest()
            .or_else(|| {
                let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
                self.tz.from_local_datetime(&shifted).earliest()
            })
            .map(|resolved| resolved.with_timezone(&Utc))
    }
}

impl Default for ZonedCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar for ZonedCalendar {
    fn whole_days_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Option<i64> {
        let from_local = self.local(from);
        let to_local = self.local(to);

        let mut days = to_local
            .date()
            .signed_duration_since(from_local.date())
            .num_days();
        if days > 0 && to_local.time() < from_local.time() {
            days -= 1;
        } else if days < 0 && to_local.time() > from_local.time() {
            days += 1;
        }

        Some(days)
    }

    fn add_years(&self, instant: DateTime<Utc>, years: i32) -> Option<DateTime<Utc>> {
        let local = self.local(instant);
        let months = Months::new(years.unsigned_abs().checked_mul(12)?);
        let shifted = if years >= 0 {
            local.checked_add_months(months)?
        } else {
            local.checked_sub_months(months)?
        };
        self.resolve_local(shifted)
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}
