use std::fmt;

use super::{
    impl_content_eq, join_full_name, normalize_namespace, Method, Property, Scope, ScopeRules,
    TypeRef,
};
use crate::hash::{EntityKind, StructuralHash, StructuralHasher, StructurallyHashed};

/// A type declaration.
///
/// Identity across snapshots is [`full_name`](Class::full_name); content
/// equality is the structural hash over every field and member.
#[derive(Clone)]
pub struct Class {
    namespace: String,
    name: String,
    full_name: String,
    base_type: Option<TypeRef>,
    interface_types: Vec<TypeRef>,
    properties: Vec<Property>,
    methods: Vec<Method>,
    hash: StructuralHash,
}

impl_content_eq!(Class);

impl Class {
    pub fn builder(namespace: impl Into<String>, name: impl Into<String>) -> ClassBuilder {
        ClassBuilder::new(namespace, name)
    }

    /// The `Empty` class: no namespace, no name, no members.
    pub fn empty() -> Self {
        ClassBuilder::new(String::new(), String::new()).build()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn base_type(&self) -> Option<&TypeRef> {
        self.base_type.as_ref()
    }

    pub fn interface_types(&self) -> &[TypeRef] {
        &self.interface_types
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn scope(&self, rules: &ScopeRules) -> Scope {
        rules.classify(&self.namespace)
    }

    /// A copy with the same identity fields, base type and interfaces but
    /// with the given members in place of the current ones.
    pub fn with_members(&self, properties: Vec<Property>, methods: Vec<Method>) -> Self {
        ClassBuilder {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            base_type: self.base_type.clone(),
            interface_types: self.interface_types.clone(),
            properties,
            methods,
        }
        .build()
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("full_name", &self.full_name)
            .field("base_type", &self.base_type)
            .field("interface_types", &self.interface_types)
            .field("properties", &self.properties)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

pub struct ClassBuilder {
    namespace: String,
    name: String,
    base_type: Option<TypeRef>,
    interface_types: Vec<TypeRef>,
    properties: Vec<Property>,
    methods: Vec<Method>,
}

impl ClassBuilder {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            base_type: None,
            interface_types: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn base_type(mut self, base_type: Option<TypeRef>) -> Self {
        self.base_type = base_type;
        self
    }

    pub fn interface_type(mut self, interface: TypeRef) -> Self {
        self.interface_types.push(interface);
        self
    }

    pub fn interface_types(mut self, interfaces: impl IntoIterator<Item = TypeRef>) -> Self {
        self.interface_types = interfaces.into_iter().collect();
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties = properties.into_iter().collect();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    pub fn build(self) -> Class {
        let namespace = normalize_namespace(self.namespace);
        let full_name = join_full_name(&namespace, &self.name);
        let hash = StructuralHasher::new(EntityKind::Class)
            .str(&namespace)
            .str(&self.name)
            .optional(self.base_type.as_ref().map(|t| t.structural_hash()))
            .ordered(self.interface_types.iter().map(|t| t.structural_hash()))
            .ordered(self.properties.iter().map(|p| p.structural_hash()))
            .ordered(self.methods.iter().map(|m| m.structural_hash()))
            .finish();
        Class {
            namespace,
            name: self.name,
            full_name,
            base_type: self.base_type,
            interface_types: self.interface_types,
            properties: self.properties,
            methods: self.methods,
            hash,
        }
    }
}
