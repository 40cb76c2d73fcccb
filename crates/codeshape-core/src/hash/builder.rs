//! Incremental structural hash builder.

use sha2::{Digest, Sha256};

use super::StructuralHash;

/// Domain tag fed first for each entity kind, so that e.g. a Property and a
/// Parameter with identical type and name never share a hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Type,
    Expression,
    Parameter,
    Property,
    MethodBody,
    Method,
    Class,
    Project,
}

impl EntityKind {
    fn tag(&self) -> &'static [u8] {
        match self {
            EntityKind::Type => b"codeshape/type/v1",
            EntityKind::Expression => b"codeshape/expression/v1",
            EntityKind::Parameter => b"codeshape/parameter/v1",
            EntityKind::Property => b"codeshape/property/v1",
            EntityKind::MethodBody => b"codeshape/method-body/v1",
            EntityKind::Method => b"codeshape/method/v1",
            EntityKind::Class => b"codeshape/class/v1",
            EntityKind::Project => b"codeshape/project/v1",
        }
    }
}

/// Feeds an entity's fields into SHA-256 in a fixed, unambiguous layout.
///
/// ```
/// use codeshape_core::hash::{EntityKind, StructuralHasher};
///
/// let a = StructuralHasher::new(EntityKind::Type).str("System").str("String").finish();
/// let b = StructuralHasher::new(EntityKind::Type).str("System").str("String").finish();
/// assert_eq!(a, b);
/// ```
pub struct StructuralHasher {
    inner: Sha256,
}

impl StructuralHasher {
    /// Start hashing an entity of the given kind.
    pub fn new(kind: EntityKind) -> Self {
        let mut inner = Sha256::new();
        let tag = kind.tag();
        inner.update((tag.len() as u64).to_le_bytes());
        inner.update(tag);
        Self { inner }
    }

    /// Length-prefixed string field.
    pub fn str(mut self, value: &str) -> Self {
        self.inner.update((value.len() as u64).to_le_bytes());
        self.inner.update(value.as_bytes());
        self
    }

    /// A child entity's hash.
    pub fn hash(mut self, child: StructuralHash) -> Self {
        self.inner.update(child.as_bytes());
        self
    }

    /// An optional child, with presence marker.
    pub fn optional(mut self, child: Option<StructuralHash>) -> Self {
        match child {
            Some(h) => {
                self.inner.update([1u8]);
                self.inner.update(h.as_bytes());
            }
            None => self.inner.update([0u8]),
        }
        self
    }

    /// An ordered sequence of strings. Order is significant.
    pub fn ordered_strs<'a, I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = values.into_iter();
        self.inner.update((iter.len() as u64).to_le_bytes());
        for value in iter {
            self = self.str(value);
        }
        self
    }

    /// An ordered sequence of child hashes. Order is significant.
    pub fn ordered<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = StructuralHash>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = children.into_iter();
        self.inner.update((iter.len() as u64).to_le_bytes());
        for child in iter {
            self.inner.update(child.as_bytes());
        }
        self
    }

    /// A membership set of child hashes. Insertion order is irrelevant.
    pub fn unordered<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = StructuralHash>,
    {
        let mut sorted: Vec<StructuralHash> = children.into_iter().collect();
        sorted.sort_unstable();
        self.ordered(sorted)
    }

    /// A membership set of strings. Insertion order is irrelevant.
    pub fn unordered_strs<'a, I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sorted: Vec<&str> = values.into_iter().collect();
        sorted.sort_unstable();
        self.ordered_strs(sorted)
    }

    /// Finalize into a [`StructuralHash`].
    pub fn finish(self) -> StructuralHash {
        StructuralHash::from_bytes(self.inner.finalize().into())
    }
}
