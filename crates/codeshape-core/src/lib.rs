//! codeshape core - structural snapshot model, hashing and change-set diff
//!
//! This crate provides the pure, synchronous kernel of codeshape:
//! - The entity model (Project → Class → Property/Method → Parameter/Type)
//! - Deterministic structural hashing of every entity
//! - The change-set diff engine (what is new or different in `new` vs `old`)
//! - The compact JSON wire codec for persisted snapshots
//! - Error and logging facilities shared with the outer crates
//!
//! No filesystem or network I/O happens here; see `codeshape-store`.

pub mod diff;
pub mod errors;
pub mod hash;
pub mod logging_facility;
pub mod model;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{diff, SnapshotOverview};
pub use errors::{CodeShapeError, ExError, ExErrorKind, Result};
pub use hash::StructuralHash;
pub use model::{
    Class, Expression, Method, MethodBody, Parameter, Project, Property, Scope, ScopeRules,
    TypeRef,
};
