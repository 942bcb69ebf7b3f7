//! Anniversary state holder.
//!
//! # Responsibility
//! - Own the single mutable anniversary instant.
//! - Delegate durability to a [`SettingsRepository`].
//! - Evaluate the delta engine and threshold gate against the injected clock.
//!
//! # Invariants
//! - Reads never write; only `set`/`reset` touch the store.
//! - The in-memory value changes only after the store accepted the write.
//! - The in-memory value is always the decoded form of what was stored, so
//!   `get()` answers the same before and after a restart.
//! - No bounds checking on new values: far past and far future are accepted.

use crate::engine::delta::{days_since, DeltaResult};
use crate::engine::gate::is_far_in_future;
use crate::model::anniversary::AnniversaryTimestamp;
use crate::repo::settings_repo::{
    RepoError, RepoResult, SettingsRepository, ANNIVERSARY_DATE_KEY,
};
use crate::service::overview::AnniversaryOverview;
use crate::time::calendar::{Calendar, ZonedCalendar};
use crate::time::clock::Clock;
use log::{error, info, warn};

/// Use-case service wrapping the anniversary register.
pub struct AnniversaryService<R: SettingsRepository, C: Clock, K: Calendar = ZonedCalendar> {
    repo: R,
    clock: C,
    calendar: K,
    current: AnniversaryTimestamp,
}

impl<R: SettingsRepository, C: Clock, K: Calendar> AnniversaryService<R, C, K> {
    /// Loads the stored anniversary, defaulting to `clock.now()`.
    ///
    /// A missing or corrupt stored value is not an error; the default is kept
    /// in memory only. Storage transport errors are returned.
    pub fn load(repo: R, clock: C, calendar: K) -> RepoResult<Self> {
        let current = match repo.get_real(ANNIVERSARY_DATE_KEY) {
            Ok(Some(seconds)) => match AnniversaryTimestamp::from_epoch_seconds(seconds) {
                Some(stamp) => stamp,
                None => {
                    warn!(
                        "event=anniversary_load module=service status=degraded reason=out_of_range"
                    );
                    AnniversaryTimestamp::new(clock.now())
                }
            },
            Ok(None) => {
                info!("event=anniversary_load module=service status=ok source=default");
                AnniversaryTimestamp::new(clock.now())
            }
            Err(RepoError::InvalidData(message)) => {
                warn!(
                    "event=anniversary_load module=service status=degraded reason=invalid_data error={}",
                    message
                );
                AnniversaryTimestamp::new(clock.now())
            }
            Err(err) => {
                error!(
                    "event=anniversary_load module=service status=error error={}",
                    err
                );
                return Err(err);
            }
        };

        Ok(Self {
            repo,
            clock,
            calendar,
            current,
        })
    }

    /// Returns the current anniversary.
    pub fn get(&self) -> AnniversaryTimestamp {
        self.current
    }

    /// Overwrites the anniversary and persists it.
    ///
    /// The value is committed at the precision the store keeps; sub-second
    /// digits an `f64` cannot carry are dropped before the write.
    ///
    /// # Errors
    /// Returns the repository error unchanged when the durable write fails;
    /// `get()` then still returns the previous value.
    pub fn set(&mut self, value: AnniversaryTimestamp) -> RepoResult<()> {
        let seconds = value.epoch_seconds();
        let stored = AnniversaryTimestamp::from_epoch_seconds(seconds).unwrap_or(value);
        match self.repo.put_real(ANNIVERSARY_DATE_KEY, seconds) {
            Ok(()) => {
                self.current = stored;
                info!("event=anniversary_set module=service status=ok");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=anniversary_set module=service status=error error_code=persist_failed error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Sets the anniversary to the clock's current instant.
    pub fn reset(&mut self) -> RepoResult<AnniversaryTimestamp> {
        self.set(AnniversaryTimestamp::new(self.clock.now()))?;
        Ok(self.current)
    }

    /// Day delta from now to the anniversary.
    pub fn delta(&self) -> DeltaResult {
        days_since(&self.calendar, self.clock.now(), self.current.instant())
    }

    /// Whether the anniversary lies more than 30 years ahead.
    pub fn developer_console_unlocked(&self) -> bool {
        is_far_in_future(&self.calendar, self.clock.now(), self.current.instant())
    }

    /// Builds one render snapshot from a single clock reading.
    pub fn overview(&self) -> AnniversaryOverview {
        let now = self.clock.now();
        let target = self.current.instant();
        AnniversaryOverview::compose(
            self.current,
            days_since(&self.calendar, now, target),
            is_far_in_future(&self.calendar, now, target),
            &self.calendar,
        )
    }

    pub fn calendar(&self) -> &K {
        &self.calendar
    }
}
