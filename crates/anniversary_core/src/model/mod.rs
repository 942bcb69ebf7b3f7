//! Domain model for the anniversary screen.
//!
//! # Responsibility
//! - Define the persisted anniversary instant and its storage encoding.
//! - Define the decorative gradient palette and its seeded selection.
//!
//! # Invariants
//! - An `AnniversaryTimestamp` is always a finite, representable instant.

pub mod anniversary;
pub mod gradient;
