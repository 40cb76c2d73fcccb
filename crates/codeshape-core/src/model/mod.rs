//! Entity model for structural snapshots.
//!
//! A strict tree: Project → Class → Property / Method → Parameter / MethodBody,
//! with [`TypeRef`] and [`Expression`] as leaves. Every entity is immutable
//! once constructed and carries its structural hash, computed eagerly from
//! its fields, so a stale hash can never be observed.
//!
//! Equality (`==`) on every entity is content equality: it compares
//! structural hashes, never references.

pub mod class;
pub mod compact;
pub mod expression;
pub mod method;
pub mod method_body;
pub mod parameter;
pub mod project;
pub mod property;
pub mod scope;
pub mod type_ref;

pub use class::{Class, ClassBuilder};
pub use expression::Expression;
pub use method::{signature_fingerprint, Method, MethodBuilder};
pub use method_body::{MethodBody, MethodBodyBuilder};
pub use parameter::Parameter;
pub use project::Project;
pub use property::Property;
pub use scope::{Scope, ScopeRules};
pub use type_ref::TypeRef;

/// Namespace marker emitted by the extraction front-end when no namespace
/// could be resolved.
pub const GLOBAL_NAMESPACE_MARKER: &str = "<global namespace>";

/// Namespace stored in place of [`GLOBAL_NAMESPACE_MARKER`].
pub const UNLINKED_NAMESPACE: &str = "Unlinked";

/// Normalize the unresolved-namespace marker to [`UNLINKED_NAMESPACE`].
pub(crate) fn normalize_namespace(namespace: String) -> String {
    if namespace == GLOBAL_NAMESPACE_MARKER {
        UNLINKED_NAMESPACE.to_string()
    } else {
        namespace
    }
}

/// `namespace.name`, or bare `name` when the namespace is empty.
pub(crate) fn join_full_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// Implements content equality (by structural hash) and `std::hash::Hash`
/// for an entity that stores its hash in a `hash` field.
macro_rules! impl_content_eq {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.hash == other.hash
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.hash.hash(state);
            }
        }

        impl $crate::hash::StructurallyHashed for $ty {
            fn structural_hash(&self) -> $crate::hash::StructuralHash {
                self.hash
            }
        }
    };
}

pub(crate) use impl_content_eq;
