//! Test support shared by the engine's unit and integration tests.
//!
//! Provides one-time logging initialisation and helpers for unique fixture names.

pub mod logging;
pub mod unique_helpers;
