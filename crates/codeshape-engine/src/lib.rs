//! codeshape engine - orchestration layer
//!
//! Provides high-level commands that coordinate the core diff and codec
//! with the store's file boundary. This is the only layer that logs
//! operation start/end.

pub mod commands;

pub use commands::compare::{compare, CompareOptions, CompareOutcome};
pub use commands::normalize::{normalize, NormalizeOutcome};
pub use commands::overview::{overview, OverviewReport, ScopeCounts};
