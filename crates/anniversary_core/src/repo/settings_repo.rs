//! Settings repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Store and load scalar settings by string key.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes are upserts: one row per key.
//! - Read paths reject non-finite stored values instead of masking them.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key under which the anniversary instant is stored.
pub const ANNIVERSARY_DATE_KEY: &str = "anniversaryDate";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for settings persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted setting: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for scalar settings.
pub trait SettingsRepository {
    /// Loads the value stored under `key`, or `None` if never written.
    fn get_real(&self, key: &str) -> RepoResult<Option<f64>>;

    /// Durably stores `value` under `key`, replacing any previous value.
    fn put_real(&self, key: &str, value: f64) -> RepoResult<()>;
}

impl<R: SettingsRepository + ?Sized> SettingsRepository for &R {
    fn get_real(&self, key: &str) -> RepoResult<Option<f64>> {
        (**self).get_real(key)
    }

    fn put_real(&self, key: &str, value: f64) -> RepoResult<()> {
        (**self).put_real(key, value)
    }
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get_real(&self, key: &str) -> RepoResult<Option<f64>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, f64>(0),
            )
            .optional()?;

        match value {
            Some(number) if !number.is_finite() => Err(RepoError::InvalidData(format!(
                "non-finite value `{number}` in settings.{key}"
            ))),
            other => Ok(other),
        }
    }

    fn put_real(&self, key: &str, value: f64) -> RepoResult<()> {
        if !value.is_finite() {
            return Err(RepoError::InvalidData(format!(
                "refusing to store non-finite value `{value}` in settings.{key}"
            )));
        }

        self.conn.execute(
            "INSERT INTO settings (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;

        Ok(())
    }
}
