//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose render, edit and reset use cases to Dart via FRB.
//! - Keep error semantics simple: envelopes with `ok` and `message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call reads the store fresh; no anniversary state is cached here.

use anniversary_core::db::open_db;
use anniversary_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    pick_gradient, AnniversaryOverview, AnniversaryService, AnniversaryTimestamp, Clock,
    ColorScheme, CoreConfig, SqliteSettingsRepository, Swatch, SystemClock,
};
use anniversary_core::service::overview::DEVELOPER_CONSOLE_LABEL;
use log::warn;
use std::sync::OnceLock;

static CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Render snapshot for the main screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewResponse {
    pub ok: bool,
    pub message: String,
    pub title: String,
    pub headline: String,
    pub days: u64,
    pub is_in_future: bool,
    pub unit_label: String,
    pub edit_action_label: String,
    /// `Some(label)` only when the hidden console entry should be shown.
    pub developer_console_label: Option<String>,
    pub developer_console_title: String,
    pub developer_console_caption: String,
    pub reset_action_label: String,
    /// Seconds since the Unix epoch, as persisted.
    pub anniversary_epoch_seconds: f64,
    pub anniversary_long_date: String,
}

impl OverviewResponse {
    fn from_overview(overview: AnniversaryOverview) -> Self {
        Self {
            ok: true,
            message: String::new(),
            title: overview.title,
            headline: overview.headline,
            days: overview.days,
            is_in_future: overview.is_in_future,
            unit_label: overview.unit_label,
            edit_action_label: overview.edit_action_label,
            developer_console_label: overview
                .developer_console_unlocked
                .then(|| DEVELOPER_CONSOLE_LABEL.to_string()),
            developer_console_title: overview.developer_console_title,
            developer_console_caption: overview.developer_console_caption,
            reset_action_label: overview.reset_action_label,
            anniversary_epoch_seconds: overview.anniversary.epoch_seconds(),
            anniversary_long_date: overview.anniversary_long_date,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            title: String::new(),
            headline: String::new(),
            days: 0,
            is_in_future: false,
            unit_label: String::new(),
            edit_action_label: String::new(),
            developer_console_label: None,
            developer_console_title: String::new(),
            developer_console_caption: String::new(),
            reset_action_label: String::new(),
            anniversary_epoch_seconds: 0.0,
            anniversary_long_date: String::new(),
        }
    }
}

/// Generic action response envelope for edit/reset flows.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Stored anniversary after the action, when it succeeded.
    pub anniversary_epoch_seconds: Option<f64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, stored: AnniversaryTimestamp) -> Self {
        Self {
            ok: true,
            anniversary_epoch_seconds: Some(stored.epoch_seconds()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            anniversary_epoch_seconds: None,
            message: message.into(),
        }
    }
}

/// Background gradient expressed as hex colors and opacities.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundResponse {
    pub ok: bool,
    pub message: String,
    pub top_hex: String,
    pub top_opacity: f32,
    pub bottom_hex: String,
    pub bottom_opacity: f32,
}

/// Returns the render snapshot for the main screen.
///
/// # FFI contract
/// - Sync call, DB-backed execution; read-only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn anniversary_overview() -> OverviewResponse {
    overview_with(resolve_config(), SystemClock)
}

/// Saves a new anniversary picked in the edit sheet.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Rejects NaN/infinite/out-of-range input without touching the store.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn anniversary_set(epoch_seconds: f64) -> ActionResponse {
    set_with(resolve_config(), SystemClock, epoch_seconds)
}

/// Resets the anniversary to now (developer console).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn anniversary_reset() -> ActionResponse {
    reset_with(resolve_config(), SystemClock)
}

/// Picks a background gradient for `scheme` (`light|dark`) from `seed`.
#[flutter_rust_bridge::frb(sync)]
pub fn pick_background(scheme: String, seed: u64) -> BackgroundResponse {
    match scheme.parse::<ColorScheme>() {
        Ok(scheme) => {
            let gradient = pick_gradient(scheme, seed);
            BackgroundResponse {
                ok: true,
                message: String::new(),
                top_hex: gradient.top.swatch.hex(),
                top_opacity: gradient.top.opacity,
                bottom_hex: gradient.bottom.swatch.hex(),
                bottom_opacity: gradient.bottom.opacity,
            }
        }
        Err(message) => BackgroundResponse {
            ok: false,
            message,
            top_hex: Swatch::White.hex(),
            top_opacity: 1.0,
            bottom_hex: Swatch::Gray.hex(),
            bottom_opacity: 1.0,
        },
    }
}

fn overview_with(config: &CoreConfig, clock: impl Clock) -> OverviewResponse {
    match with_service(config, clock, |service| Ok(service.overview())) {
        Ok(overview) => OverviewResponse::from_overview(overview),
        Err(err) => OverviewResponse::failure(format!("anniversary_overview failed: {err}")),
    }
}

fn set_with(config: &CoreConfig, clock: impl Clock, epoch_seconds: f64) -> ActionResponse {
    let Some(value) = AnniversaryTimestamp::from_epoch_seconds(epoch_seconds) else {
        warn!("event=anniversary_set module=ffi status=rejected reason=invalid_instant");
        return ActionResponse::failure(format!(
            "anniversary_set failed: `{epoch_seconds}` is not a valid instant"
        ));
    };

    match with_service(config, clock, |service| {
        service.set(value).map_err(|err| err.to_string())?;
        Ok(service.get())
    }) {
        Ok(stored) => ActionResponse::success("Anniversary saved.", stored),
        Err(err) => ActionResponse::failure(format!("anniversary_set failed: {err}")),
    }
}

fn reset_with(config: &CoreConfig, clock: impl Clock) -> ActionResponse {
    match with_service(config, clock, |service| {
        service.reset().map_err(|err| err.to_string())
    }) {
        Ok(stored) => ActionResponse::success("Anniversary reset.", stored),
        Err(err) => ActionResponse::failure(format!("anniversary_reset failed: {err}")),
    }
}

fn resolve_config() -> &'static CoreConfig {
    CONFIG.get_or_init(CoreConfig::from_env)
}

fn with_service<C: Clock, T>(
    config: &CoreConfig,
    clock: C,
    f: impl FnOnce(&mut AnniversaryService<SqliteSettingsRepository<'_>, C>) -> Result<T, String>,
) -> Result<T, String> {
    let calendar = config.calendar().map_err(|err| err.to_string())?;
    let conn = open_db(&config.db_path).map_err(|err| format!("DB open failed: {err}"))?;
    let mut service =
        AnniversaryService::load(SqliteSettingsRepository::new(&conn), clock, calendar)
            .map_err(|err| format!("anniversary load failed: {err}"))?;
    f(&mut service)
}
