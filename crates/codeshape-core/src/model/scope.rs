//! Namespace-prefix scope classification.
//!
//! Downstream consumers use these predicates to separate the shared
//! framework from the client code that builds on it.

use serde::Deserialize;

/// Namespace prefixes that decide a type's [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeRules {
    /// Namespaces starting with this prefix are in scope at all.
    pub in_scope_prefix: String,
    /// In-scope namespaces starting with this prefix are framework code.
    pub framework_prefix: String,
}

impl Default for ScopeRules {
    fn default() -> Self {
        Self {
            in_scope_prefix: "DataTorque.".to_string(),
            framework_prefix: "DataTorque.Iho".to_string(),
        }
    }
}

impl ScopeRules {
    /// Classify a namespace.
    pub fn classify(&self, namespace: &str) -> Scope {
        if !namespace.starts_with(&self.in_scope_prefix) {
            Scope::OutOfScope
        } else if namespace.starts_with(&self.framework_prefix) {
            Scope::Framework
        } else {
            Scope::Leaf
        }
    }
}

/// Where a class or type sits relative to the configured prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// In scope, under the framework prefix
    Framework,
    /// In scope, outside the framework prefix (client code)
    Leaf,
    /// Neither
    OutOfScope,
}

impl Scope {
    pub fn is_in_scope(&self) -> bool {
        !matches!(self, Scope::OutOfScope)
    }

    pub fn is_framework(&self) -> bool {
        matches!(self, Scope::Framework)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Scope::Leaf)
    }
}
