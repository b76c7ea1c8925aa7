//! Shared utilities for Roster.
//!
//! Logger initialization and clock helpers used by every binary in the
//! workspace.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
