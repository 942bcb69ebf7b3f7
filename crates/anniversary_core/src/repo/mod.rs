//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value contract the state holder persists through.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`InvalidData`) in addition to DB
//!   transport errors.

pub mod settings_repo;
