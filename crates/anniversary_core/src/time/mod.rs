//! Time sources and calendar arithmetic.
//!
//! # Responsibility
//! - Abstract "now" behind [`clock::Clock`] so core logic never reads system time.
//! - Abstract day counting and year addition behind [`calendar::Calendar`].
//!
//! # Invariants
//! - Calendar arithmetic respects local day boundaries, never fixed 86400s slices.

pub mod calendar;
pub mod clock;
