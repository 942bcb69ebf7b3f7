//! Anniversary instant and its epoch-seconds encoding.
//!
//! # Invariants
//! - Construction from a raw float rejects NaN, infinities and instants
//!   outside chrono's range.
//! - Sub-second precision is kept up to nanoseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// The single user-configured reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnniversaryTimestamp(DateTime<Utc>);

impl AnniversaryTimestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Decodes the stored floating-point seconds since the Unix epoch.
    ///
    /// Returns `None` for values that do not denote a valid instant.
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }

        let whole = seconds.floor();
        let mut secs = whole as i64;
        let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as u32;
        if nanos >= 1_000_000_000 {
            secs = secs.checked_add(1)?;
            nanos = 0;
        }

        DateTime::from_timestamp(secs, nanos).map(Self)
    }

    /// Storage encoding: floating-point seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / NANOS_PER_SECOND
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for AnniversaryTimestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Display for AnniversaryTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
