//! Flutter-facing bindings for the anniversary core.

pub mod api;
