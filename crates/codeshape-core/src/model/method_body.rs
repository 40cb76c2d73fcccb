//! Extracted facts about a method's implementation.
//!
//! The three reference collections are membership sets: duplicates (by
//! content) are dropped on insert, first-seen order is kept for encoding,
//! and the structural hash ignores order entirely.

use std::collections::HashSet;
use std::fmt;

use super::{impl_content_eq, Expression, TypeRef};
use crate::hash::{EntityKind, StructuralHash, StructuralHasher, StructurallyHashed};

#[derive(Clone)]
pub struct MethodBody {
    body_text: String,
    original_body_text: String,
    referenced_types: Vec<TypeRef>,
    referenced_procedures: Vec<String>,
    referenced_expressions: Vec<Expression>,
    hash: StructuralHash,
}

impl_content_eq!(MethodBody);

impl MethodBody {
    pub fn builder() -> MethodBodyBuilder {
        MethodBodyBuilder::default()
    }

    /// The `Empty` body: no text, no references.
    pub fn empty() -> Self {
        MethodBodyBuilder::default().build()
    }

    /// Body text after normalization by the extraction front-end.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Body text exactly as written in source.
    pub fn original_body_text(&self) -> &str {
        &self.original_body_text
    }

    pub fn referenced_types(&self) -> &[TypeRef] {
        &self.referenced_types
    }

    /// Names of external stored procedures the body calls.
    pub fn referenced_procedures(&self) -> &[String] {
        &self.referenced_procedures
    }

    pub fn referenced_expressions(&self) -> &[Expression] {
        &self.referenced_expressions
    }

    pub fn is_empty(&self) -> bool {
        self.body_text.is_empty()
            && self.original_body_text.is_empty()
            && self.referenced_types.is_empty()
            && self.referenced_procedures.is_empty()
            && self.referenced_expressions.is_empty()
    }
}

impl Default for MethodBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodBody")
            .field("body_text", &self.body_text)
            .field("referenced_types", &self.referenced_types)
            .field("referenced_procedures", &self.referenced_procedures)
            .field("referenced_expressions", &self.referenced_expressions)
            .finish_non_exhaustive()
    }
}

/// Accumulates a [`MethodBody`]; the hash is computed once in [`build`].
///
/// [`build`]: MethodBodyBuilder::build
#[derive(Default)]
pub struct MethodBodyBuilder {
    body_text: String,
    original_body_text: String,
    referenced_types: Vec<TypeRef>,
    referenced_procedures: Vec<String>,
    referenced_expressions: Vec<Expression>,
    seen_types: HashSet<StructuralHash>,
    seen_procedures: HashSet<String>,
    seen_expressions: HashSet<StructuralHash>,
}

impl MethodBodyBuilder {
    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        self.body_text = text.into();
        self
    }

    pub fn original_body_text(mut self, text: impl Into<String>) -> Self {
        self.original_body_text = text.into();
        self
    }

    pub fn referenced_type(mut self, type_ref: TypeRef) -> Self {
        if self.seen_types.insert(type_ref.structural_hash()) {
            self.referenced_types.push(type_ref);
        }
        self
    }

    pub fn referenced_types(self, types: impl IntoIterator<Item = TypeRef>) -> Self {
        types.into_iter().fold(self, Self::referenced_type)
    }

    pub fn referenced_procedure(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.seen_procedures.insert(name.clone()) {
            self.referenced_procedures.push(name);
        }
        self
    }

    pub fn referenced_procedures<S: Into<String>>(
        self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        names
            .into_iter()
            .fold(self, |builder, name| builder.referenced_procedure(name))
    }

    pub fn referenced_expression(mut self, expression: Expression) -> Self {
        if self.seen_expressions.insert(expression.structural_hash()) {
            self.referenced_expressions.push(expression);
        }
        self
    }

    pub fn referenced_expressions(self, expressions: impl IntoIterator<Item = Expression>) -> Self {
        expressions
            .into_iter()
            .fold(self, Self::referenced_expression)
    }

    pub fn build(self) -> MethodBody {
        let hash = StructuralHasher::new(EntityKind::MethodBody)
            .str(&self.body_text)
            .str(&self.original_body_text)
            .unordered(self.referenced_types.iter().map(|t| t.structural_hash()))
            .unordered_strs(self.referenced_procedures.iter().map(String::as_str))
            .unordered(
                self.referenced_expressions
                    .iter()
                    .map(|e| e.structural_hash()),
            )
            .finish();
        MethodBody {
            body_text: self.body_text,
            original_body_text: self.original_body_text,
            referenced_types: self.referenced_types,
            referenced_procedures: self.referenced_procedures,
            referenced_expressions: self.referenced_expressions,
            hash,
        }
    }
}
