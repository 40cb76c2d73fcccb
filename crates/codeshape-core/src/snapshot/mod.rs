//! Snapshot document encoding and digests.
//!
//! ## Responsibilities
//!
//! - Serde wire form for every entity (compact strings where possible)
//! - Decode / encode whole `[Project]` documents
//! - Deterministic digest of a snapshot's canonical encoding
//!
//! ## Non-Responsibilities
//!
//! - File I/O (handled by `codeshape-store`)
//! - Orchestration (handled by `codeshape-engine`)

pub mod codec;
pub mod digest;
mod wire;

pub use codec::{decode_snapshot, encode_snapshot, Indent};
pub use digest::compute_snapshot_digest;
