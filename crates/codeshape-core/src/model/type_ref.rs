use std::fmt;

use super::{impl_content_eq, join_full_name, normalize_namespace, Scope, ScopeRules};
use crate::hash::{EntityKind, StructuralHash, StructuralHasher};

/// Literal name of the void sentinel.
pub const VOID_NAME: &str = "void";

/// A reference to a named type.
///
/// Hash input is the full name only, so `("A.B", "C")` and `("A", "B.C")`
/// are the same type, matching how the compact wire form collapses them.
#[derive(Clone)]
pub struct TypeRef {
    namespace: String,
    name: String,
    full_name: String,
    hash: StructuralHash,
}

impl_content_eq!(TypeRef);

impl TypeRef {
    /// Create a type reference. The unresolved-namespace marker is
    /// normalized to `Unlinked`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = normalize_namespace(namespace.into());
        let name = name.into();
        let full_name = join_full_name(&namespace, &name);
        let hash = StructuralHasher::new(EntityKind::Type)
            .str(&full_name)
            .finish();
        Self {
            namespace,
            name,
            full_name,
            hash,
        }
    }

    /// The `Empty` sentinel: no namespace, no name.
    pub fn empty() -> Self {
        Self::new(String::new(), String::new())
    }

    /// The `void` sentinel used for methods without a return value.
    pub fn void() -> Self {
        Self::new(String::new(), VOID_NAME)
    }

    /// Parse a dotted full name. The last segment is the name; everything
    /// before it is the namespace. `""` is `Empty`, `"void"` is `void`.
    ///
    /// ```
    /// use codeshape_core::TypeRef;
    ///
    /// let t = TypeRef::parse("System.Collections.List");
    /// assert_eq!(t.namespace(), "System.Collections");
    /// assert_eq!(t.name(), "List");
    /// assert!(TypeRef::parse("  ").is_empty());
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::empty();
        }
        if text == VOID_NAME {
            return Self::void();
        }
        match text.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new(String::new(), text),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `namespace.name`, or bare `name` when the namespace is empty.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() && self.name.is_empty()
    }

    pub fn is_void(&self) -> bool {
        self.namespace.is_empty() && self.name == VOID_NAME
    }

    /// Classify by namespace prefix.
    pub fn scope(&self, rules: &ScopeRules) -> Scope {
        rules.classify(&self.namespace)
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({:?})", self.full_name)
    }
}
