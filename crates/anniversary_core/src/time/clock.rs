//! Platform clock port.
//!
//! # Responsibility
//! - Supply the current instant to services and the engine callers.
//!
//! # Invariants
//! - Core logic never calls `Utc::now()` outside [`SystemClock`].

use chrono::{DateTime, Utc};

/// A port that provides the current instant.
///
/// Implementations can be swapped (system clock, fixed clock) so tests stay
/// deterministic.
pub trait Clock {
    /// Returns the current absolute instant.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// [`Clock`] that always returns the same instant.
///
/// Used by tests and by the CLI `--now` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
