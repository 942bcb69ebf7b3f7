//! Pure date computations rendered on every refresh.
//!
//! # Responsibility
//! - Derive the signed day delta between "now" and the anniversary.
//! - Decide whether the anniversary is far enough ahead to unlock the
//!   developer console.
//!
//! # Invariants
//! - Functions are pure: same calendar and inputs, same output.
//! - Nothing here returns an error; degenerate calendar results degrade to
//!   neutral values.

pub mod delta;
pub mod gate;
