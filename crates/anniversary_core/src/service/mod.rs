//! Core use-case services.
//!
//! # Responsibility
//! - Own the anniversary state and orchestrate engine calls around it.
//! - Shape render-ready snapshots so UI/FFI layers stay free of date logic.

pub mod anniversary_service;
pub mod overview;
