use std::fmt;

use serde::Serialize;

/// A named, flattened schema: one per component schema and one per
/// synthesized request, response or nested subtype.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDefinition {
    pub name: String,
    pub properties: Vec<PropertyDefinition>,
}

/// A property of a `SchemaDefinition`.
///
/// `creates_object_subtype` holds iff the property is an inline object with
/// at least one declared property; `creates_array_subtype` holds iff it is an
/// array whose items are not a recognized primitive. `subtype_name` is set
/// exactly when one of the two flags is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDefinition {
    pub name: String,
    pub declared_type: TypeRef,
    pub creates_object_subtype: bool,
    pub creates_array_subtype: bool,
    pub subtype_name: Option<String>,
}

/// Primitive types a document may declare for parameters and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Int32,
    Text,
    Bool,
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    Named(String),
    ArrayOf(Box<TypeRef>),
    /// Free-form object without declared properties.
    Any,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn array_of(inner: TypeRef) -> Self {
        TypeRef::ArrayOf(Box::new(inner))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(PrimitiveType::Int32) => f.write_str("int32"),
            TypeRef::Primitive(PrimitiveType::Text) => f.write_str("string"),
            TypeRef::Primitive(PrimitiveType::Bool) => f.write_str("bool"),
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::ArrayOf(inner) => write!(f, "{inner}[]"),
            TypeRef::Any => f.write_str("any"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypeRef::Primitive(PrimitiveType::Int32).to_string(), "int32");
        assert_eq!(TypeRef::named("Pet").to_string(), "Pet");
        assert_eq!(
            TypeRef::array_of(TypeRef::array_of(TypeRef::Primitive(PrimitiveType::Text)))
                .to_string(),
            "string[][]"
        );
        assert_eq!(TypeRef::Any.to_string(), "any");
    }
}
