//! Serde implementations for the snapshot wire form.
//!
//! | Entity | Encoded as |
//! |---|---|
//! | TypeRef | `""`, `"void"` or the full name; `{Namespace, Name}` accepted on decode |
//! | Property / Parameter / Expression | `"<Type> <name>"`; `{Type, Name}` accepted on decode |
//! | MethodBody | object, every empty field omitted |
//! | Method | object; `Modifiers` space-joined (array accepted on decode) |
//! | Class | object; `BaseType` always written, empty lists omitted |
//! | Project | `{Name, Classes}` |

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CodeShapeError, Result};
use crate::model::compact::ensure_compact;
use crate::model::{
    Class, Expression, Method, MethodBody, Parameter, Project, Property, TypeRef,
};

// ---------- TypeRef ----------

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.full_name())
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TypeRefVisitor)
    }
}

struct TypeRefVisitor;

impl<'de> Visitor<'de> for TypeRefVisitor {
    type Value = TypeRef;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a type name string or a {Namespace, Name} object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<TypeRef, E> {
        Ok(TypeRef::parse(value))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<TypeRef, E> {
        Ok(TypeRef::empty())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<TypeRef, A::Error> {
        let mut namespace = String::new();
        let mut name = String::new();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "Namespace" => namespace = map.next_value()?,
                "Name" => name = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(TypeRef::new(namespace, name))
    }
}

// ---------- Compact "<Type> <name>" entities ----------

/// Entities sharing the compact `"<Type> <name>"` wire form.
trait CompactEntity: Sized {
    fn from_parts(type_ref: TypeRef, name: String) -> Self;
    fn parse(text: &str) -> Result<Self>;
    fn empty() -> Self;
    fn parts(&self) -> (&TypeRef, &str);
    fn to_compact(&self) -> String;
}

macro_rules! compact_entity {
    ($ty:ty) => {
        impl CompactEntity for $ty {
            fn from_parts(type_ref: TypeRef, name: String) -> Self {
                <$ty>::new(type_ref, name)
            }

            fn parse(text: &str) -> Result<Self> {
                <$ty>::parse(text)
            }

            fn empty() -> Self {
                <$ty>::empty()
            }

            fn parts(&self) -> (&TypeRef, &str) {
                (self.type_ref(), self.name())
            }

            fn to_compact(&self) -> String {
                <$ty>::to_compact(self)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                let (type_ref, name) = CompactEntity::parts(self);
                ensure_compact(type_ref, name).map_err(<S::Error as ser::Error>::custom)?;
                serializer.serialize_str(&CompactEntity::to_compact(self))
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                deserializer.deserialize_any(CompactVisitor::<$ty>(PhantomData))
            }
        }
    };
}

compact_entity!(Property);
compact_entity!(Parameter);
compact_entity!(Expression);

struct CompactVisitor<T>(PhantomData<T>);

impl<'de, T: CompactEntity> Visitor<'de> for CompactVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a \"<Type> <name>\" string or a {Type, Name} object")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<T, E> {
        T::parse(value).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<T, E> {
        Ok(T::empty())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<T, A::Error> {
        let mut type_ref = TypeRef::empty();
        let mut name = String::new();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "Type" => type_ref = map.next_value()?,
                "Name" => name = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(T::from_parts(type_ref, name))
    }
}

// ---------- Object-only entities ----------

/// Accepts only a JSON object, handing it to `T`'s derived field reader.
/// Any other token aborts with [`CodeShapeError::MissingObjectStart`].
struct ObjectVisitor<T> {
    entity: &'static str,
    marker: PhantomData<T>,
}

impl<T> ObjectVisitor<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            marker: PhantomData,
        }
    }

    fn reject<E: de::Error>(&self) -> E {
        E::custom(CodeShapeError::MissingObjectStart {
            entity: self.entity.to_string(),
        })
    }
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an object to start {}", self.entity)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<T, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<T, E> {
        Err(self.reject())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> std::result::Result<T, A::Error> {
        Err(self.reject())
    }
}

// ---------- MethodBody ----------

impl Serialize for MethodBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MethodBody", 5)?;
        if !self.body_text().is_empty() {
            state.serialize_field("BodyText", self.body_text())?;
        }
        if !self.original_body_text().is_empty() {
            state.serialize_field("OriginalBodyText", self.original_body_text())?;
        }
        if !self.referenced_types().is_empty() {
            state.serialize_field("ReferencedTypes", self.referenced_types())?;
        }
        if !self.referenced_procedures().is_empty() {
            state.serialize_field("ReferencedStoredProcedures", self.referenced_procedures())?;
        }
        if !self.referenced_expressions().is_empty() {
            state.serialize_field("ReferencedExpressions", self.referenced_expressions())?;
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MethodBodyFields {
    #[serde(default)]
    body_text: String,
    #[serde(default)]
    original_body_text: String,
    #[serde(default)]
    referenced_types: Vec<TypeRef>,
    #[serde(default, rename = "ReferencedStoredProcedures")]
    referenced_procedures: Vec<String>,
    #[serde(default)]
    referenced_expressions: Vec<Expression>,
}

impl<'de> Deserialize<'de> for MethodBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields: MethodBodyFields =
            deserializer.deserialize_any(ObjectVisitor::new("MethodBody"))?;
        Ok(MethodBody::builder()
            .body_text(fields.body_text)
            .original_body_text(fields.original_body_text)
            .referenced_types(fields.referenced_types)
            .referenced_procedures(fields.referenced_procedures)
            .referenced_expressions(fields.referenced_expressions)
            .build())
    }
}

// ---------- Method ----------

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Method", 6)?;
        if !self.modifiers().is_empty() {
            state.serialize_field("Modifiers", &self.modifiers().join(" "))?;
        }
        state.serialize_field("ReturnType", self.return_type())?;
        state.serialize_field("Name", self.name())?;
        state.serialize_field("Hash", self.signature())?;
        if !self.parameters().is_empty() {
            state.serialize_field("Parameters", self.parameters())?;
        }
        if !self.body().is_empty() {
            state.serialize_field("Body", self.body())?;
        }
        state.end()
    }
}

/// `Modifiers` is written space-joined but older documents carry an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModifiersWire {
    Joined(String),
    List(Vec<String>),
}

impl Default for ModifiersWire {
    fn default() -> Self {
        ModifiersWire::List(Vec::new())
    }
}

impl ModifiersWire {
    fn into_vec(self) -> Vec<String> {
        match self {
            ModifiersWire::Joined(text) => text.split_whitespace().map(str::to_string).collect(),
            ModifiersWire::List(list) => list,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MethodFields {
    #[serde(default)]
    modifiers: ModifiersWire,
    #[serde(default)]
    return_type: TypeRef,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "Hash")]
    signature: String,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    body: MethodBody,
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields: MethodFields = deserializer.deserialize_any(ObjectVisitor::new("Method"))?;
        Ok(Method::builder(fields.name)
            .modifiers(fields.modifiers.into_vec())
            .return_type(fields.return_type)
            .signature(fields.signature)
            .parameters(fields.parameters)
            .body(fields.body)
            .build())
    }
}

// ---------- Class ----------

impl Serialize for Class {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Class", 6)?;
        state.serialize_field("Namespace", self.namespace())?;
        state.serialize_field("Name", self.name())?;
        state.serialize_field("BaseType", &self.base_type())?;
        if !self.interface_types().is_empty() {
            state.serialize_field("InterfaceTypes", self.interface_types())?;
        }
        if !self.properties().is_empty() {
            state.serialize_field("Properties", self.properties())?;
        }
        if !self.methods().is_empty() {
            state.serialize_field("Methods", self.methods())?;
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ClassFields {
    #[serde(default)]
    namespace: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    base_type: Option<TypeRef>,
    #[serde(default)]
    interface_types: Vec<TypeRef>,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    methods: Vec<Method>,
}

impl<'de> Deserialize<'de> for Class {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields: ClassFields = deserializer.deserialize_any(ObjectVisitor::new("Class"))?;
        Ok(Class::builder(fields.namespace, fields.name)
            .base_type(fields.base_type)
            .interface_types(fields.interface_types)
            .properties(fields.properties)
            .methods(fields.methods)
            .build())
    }
}

// ---------- Project ----------

impl Serialize for Project {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Project", 2)?;
        state.serialize_field("Name", self.name())?;
        state.serialize_field("Classes", self.classes())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProjectFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    classes: Vec<Class>,
}

impl<'de> Deserialize<'de> for Project {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let fields: ProjectFields = deserializer.deserialize_any(ObjectVisitor::new("Project"))?;
        Ok(Project::new(fields.name, fields.classes))
    }
}
