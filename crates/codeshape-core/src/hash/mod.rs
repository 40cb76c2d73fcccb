//! Deterministic structural hashing.
//!
//! Every entity in the model owns a [`StructuralHash`] computed once, at
//! construction, from its own scalar fields and the hashes of its children.
//! Two entities of the same kind are content-equal iff their hashes match.
//!
//! ## Determinism Guarantees
//!
//! - SHA-256 with no per-process seed: the same content hashes identically
//!   in every process, on every machine
//! - Every field is length-prefixed, so `("ab", "c")` and `("a", "bc")` differ
//! - Each entity kind feeds a distinct domain tag first
//! - Ordered collections are hashed in sequence (reordering changes the hash)
//! - Membership sets are hashed after sorting member hashes (insertion order
//!   is irrelevant)

pub mod builder;

pub use builder::{EntityKind, StructuralHasher};

use std::fmt;

/// A 256-bit structural fingerprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralHash([u8; 32]);

impl StructuralHash {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lower-case hex rendering (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for StructuralHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for StructuralHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix keeps assertion output readable.
        write!(f, "StructuralHash({}..)", &self.to_hex()[..12])
    }
}

/// Access to an entity's precomputed structural hash.
pub trait StructurallyHashed {
    fn structural_hash(&self) -> StructuralHash;
}
