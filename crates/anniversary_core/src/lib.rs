//! Core domain logic for the anniversary tracker.
//! This crate is the single source of truth for date and gating invariants.

pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod time;

pub use config::CoreConfig;
pub use engine::delta::{days_since, DeltaResult};
pub use engine::gate::{is_far_in_future, FAR_FUTURE_YEARS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::anniversary::AnniversaryTimestamp;
pub use model::gradient::{pick_gradient, ColorScheme, ColorStop, Gradient, Swatch};
pub use repo::settings_repo::{
    RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository, ANNIVERSARY_DATE_KEY,
};
pub use service::anniversary_service::AnniversaryService;
pub use service::overview::{format_long_date, unit_label, AnniversaryOverview};
pub use time::calendar::{Calendar, UnknownTimeZone, ZonedCalendar};
pub use time::clock::{Clock, FixedClock, SystemClock};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
