//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Resolve the database path, calendar zone and log level from the
//!   environment, with defaults for every value.
//!
//! # Invariants
//! - Blank variables count as unset.
//! - Loading never fails; invalid zone names surface from [`CoreConfig::calendar`].

use crate::logging::default_log_level;
use crate::time::calendar::{UnknownTimeZone, ZonedCalendar};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "ANNIVERSARY_DB_PATH";
pub const TIME_ZONE_ENV: &str = "ANNIVERSARY_TZ";
pub const LOG_LEVEL_ENV: &str = "ANNIVERSARY_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "anniversary.sqlite3";
const DEFAULT_TIME_ZONE: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding the settings table.
    pub db_path: PathBuf,
    /// IANA zone whose calendar defines day boundaries.
    pub time_zone: String,
    pub log_level: String,
}

impl CoreConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_provider(|name| std::env::var(name).ok())
    }

    /// Reads configuration through a custom lookup, e.g. a map in tests.
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            provider(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)),
            time_zone: read(TIME_ZONE_ENV).unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
        }
    }

    /// Builds the calendar for the configured zone.
    pub fn calendar(&self) -> Result<ZonedCalendar, UnknownTimeZone> {
        ZonedCalendar::from_name(&self.time_zone)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::from_provider(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_LEVEL_ENV, TIME_ZONE_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn provider(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = CoreConfig::default();

        assert_eq!(
            config.db_path,
            std::env::temp_dir().join("anniversary.sqlite3")
        );
        assert_eq!(config.time_zone, "UTC");
        assert_eq!(config.log_level, default_log_level());
        assert!(config.calendar().is_ok());
    }

    #[test]
    fn provider_values_override_defaults() {
        let config = CoreConfig::from_provider(provider(&[
            (DB_PATH_ENV, "/var/lib/anniversary/store.sqlite3"),
            (TIME_ZONE_ENV, " Europe/Berlin "),
            (LOG_LEVEL_ENV, "warn"),
        ]));

        assert_eq!(
            config.db_path,
            PathBuf::from("/var/lib/anniversary/store.sqlite3")
        );
        assert_eq!(config.time_zone, "Europe/Berlin");
        assert_eq!(config.log_level, "warn");
        assert!(config.calendar().is_ok());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = CoreConfig::from_provider(provider(&[(TIME_ZONE_ENV, "   ")]));
        assert_eq!(config.time_zone, "UTC");
    }

    #[test]
    fn unknown_zone_fails_at_calendar_construction() {
        let config = CoreConfig::from_provider(provider(&[(TIME_ZONE_ENV, "Nowhere/Land")]));
        assert!(config.calendar().is_err());
    }
}
