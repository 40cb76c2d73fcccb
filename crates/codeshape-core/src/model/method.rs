use std::fmt;

use sha2::{Digest, Sha256};

use super::{impl_content_eq, MethodBody, Parameter, TypeRef};
use crate::hash::{EntityKind, StructuralHash, StructuralHasher, StructurallyHashed};

/// SHA-256 of a method's declared signature text, as 64 upper-case hex
/// characters.
///
/// The hashed text is `"{modifiers} {return_type} {name} ({p1, p2})"`.
/// This fingerprint is independent of the structural hash and travels on
/// the wire as the method's `Hash` field.
///
/// ```
/// use codeshape_core::model::signature_fingerprint;
///
/// let fp = signature_fingerprint("public", "void", "Run", &[]);
/// assert_eq!(fp.len(), 64);
/// assert_eq!(fp, fp.to_uppercase());
/// ```
pub fn signature_fingerprint(
    modifiers: &str,
    return_type: &str,
    name: &str,
    parameters: &[String],
) -> String {
    let text = format!(
        "{} {} {} ({})",
        modifiers,
        return_type,
        name,
        parameters.join(", ")
    );
    hex::encode_upper(Sha256::digest(text.as_bytes()))
}

/// A class member function.
#[derive(Clone)]
pub struct Method {
    modifiers: Vec<String>,
    return_type: TypeRef,
    name: String,
    signature: String,
    parameters: Vec<Parameter>,
    body: MethodBody,
    hash: StructuralHash,
}

impl_content_eq!(Method);

impl Method {
    pub fn builder(name: impl Into<String>) -> MethodBuilder {
        MethodBuilder::new(name)
    }

    /// The `Empty` method: no modifiers, `void` return, no name.
    pub fn empty() -> Self {
        MethodBuilder::new(String::new())
            .signature(String::new())
            .build()
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The signature fingerprint (see [`signature_fingerprint`]).
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn body(&self) -> &MethodBody {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_compact()).collect();
        write!(f, "{} {}({})", self.return_type, self.name, params.join(", "))
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("modifiers", &self.modifiers)
            .field("return_type", &self.return_type)
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Accumulates a [`Method`].
///
/// When no signature fingerprint is supplied, [`build`](Self::build)
/// derives one from the modifiers, return type, name and parameters.
pub struct MethodBuilder {
    modifiers: Vec<String>,
    return_type: TypeRef,
    name: String,
    signature: Option<String>,
    parameters: Vec<Parameter>,
    body: MethodBody,
}

impl MethodBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            return_type: TypeRef::void(),
            name: name.into(),
            signature: None,
            parameters: Vec::new(),
            body: MethodBody::empty(),
        }
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn modifiers<S: Into<String>>(mut self, modifiers: impl IntoIterator<Item = S>) -> Self {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn return_type(mut self, return_type: TypeRef) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters = parameters.into_iter().collect();
        self
    }

    pub fn body(mut self, body: MethodBody) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Method {
        let signature = match self.signature {
            Some(signature) => signature,
            None => {
                let params: Vec<String> =
                    self.parameters.iter().map(|p| p.to_compact()).collect();
                signature_fingerprint(
                    &self.modifiers.join(" "),
                    self.return_type.full_name(),
                    &self.name,
                    &params,
                )
            }
        };
        let hash = StructuralHasher::new(EntityKind::Method)
            .ordered_strs(self.modifiers.iter().map(String::as_str))
            .hash(self.return_type.structural_hash())
            .str(&self.name)
            .str(&signature)
            .ordered(self.parameters.iter().map(|p| p.structural_hash()))
            .hash(self.body.structural_hash())
            .finish();
        Method {
            modifiers: self.modifiers,
            return_type: self.return_type,
            name: self.name,
            signature,
            parameters: self.parameters,
            body: self.body,
            hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> MethodBuilder {
        Method::builder("Run")
            .modifiers(["public", "static"])
            .return_type(TypeRef::parse("int"))
            .parameter(Parameter::new(TypeRef::parse("string"), "arg"))
    }

    #[test]
    fn test_fingerprint_is_derived_from_signature_text() {
        let method = run().build();
        let expected = signature_fingerprint(
            "public static",
            "int",
            "Run",
            &["string arg".to_string()],
        );
        assert_eq!(method.signature(), expected);
    }

    #[test]
    fn test_fingerprint_ignores_body() {
        let a = run().build();
        let b = run()
            .body(MethodBody::builder().body_text("return 1;").build())
            .build();
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a, b);
    }

    #[test]
    fn test_modifier_order_is_significant() {
        let a = run().build();
        let b = run().modifiers(["static", "public"]).build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parameter_change_propagates() {
        let a = run().build();
        let b = Method::builder("Run")
            .modifiers(["public", "static"])
            .return_type(TypeRef::parse("int"))
            .parameter(Parameter::new(TypeRef::parse("string"), "other"))
            .build();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_method() {
        let empty = Method::empty();
        assert!(empty.is_empty());
        assert!(empty.return_type().is_void());
        assert_eq!(empty.signature(), "");
        assert!(!run().build().is_empty());
    }
}
