use std::fmt;

use super::compact::{format_compact, parse_compact};
use super::{impl_content_eq, TypeRef};
use crate::errors::Result;
use crate::hash::{EntityKind, StructuralHash, StructuralHasher, StructurallyHashed};

/// A method parameter.
#[derive(Clone)]
pub struct Parameter {
    type_ref: TypeRef,
    name: String,
    hash: StructuralHash,
}

impl_content_eq!(Parameter);

impl Parameter {
    pub fn new(type_ref: TypeRef, name: impl Into<String>) -> Self {
        let name = name.into();
        let hash = StructuralHasher::new(EntityKind::Parameter)
            .hash(type_ref.structural_hash())
            .str(&name)
            .finish();
        Self {
            type_ref,
            name,
            hash,
        }
    }

    pub fn empty() -> Self {
        Self::new(TypeRef::empty(), String::new())
    }

    /// Parse the compact `"<Type> <name>"` form.
    ///
    /// # Errors
    ///
    /// Returns `CodeShapeError::CompactFormat` for more than two tokens.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(match parse_compact(text)? {
            Some((type_ref, name)) => Self::new(type_ref, name),
            None => Self::empty(),
        })
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.type_ref.is_empty() && self.name.is_empty()
    }

    pub fn to_compact(&self) -> String {
        format_compact(&self.type_ref, &self.name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact())
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.to_compact())
    }
}
