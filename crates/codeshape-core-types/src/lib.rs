//! Core types shared across codeshape facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by anything that asserts on emitted events:
//!
//! - **Field keys**: component, op, event, duration, entity counters
//! - **Event names**: start / end / end_error operation boundaries

pub mod schema;
