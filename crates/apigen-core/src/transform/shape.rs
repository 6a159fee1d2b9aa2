use indexmap::IndexMap;

use crate::parse::schema::{SchemaOrRef, SchemaType};

/// The structural kind of a schema, classified once so consumers match
/// exhaustively instead of probing optional fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaShape<'a> {
    /// A `$ref` to a named component schema.
    Reference(&'a str),
    /// `type: object` with its (possibly empty) declared properties.
    Object(&'a IndexMap<String, SchemaOrRef>),
    /// `type: array` with its item schema, if declared.
    Array(Option<&'a SchemaOrRef>),
    /// Any other declared type name, supported or not.
    Primitive(&'a str),
    /// No `type` and no `$ref`.
    Untyped,
}

impl<'a> SchemaShape<'a> {
    pub fn of(schema: &'a SchemaOrRef) -> Self {
        match schema {
            SchemaOrRef::Ref { ref_path } => {
                SchemaShape::Reference(ref_path.rsplit('/').next().unwrap_or(ref_path))
            }
            SchemaOrRef::Schema(s) => match &s.schema_type {
                Some(SchemaType::Object) => SchemaShape::Object(&s.properties),
                Some(SchemaType::Array) => SchemaShape::Array(s.items.as_deref()),
                Some(other) => SchemaShape::Primitive(other.as_str()),
                None => SchemaShape::Untyped,
            },
        }
    }
}

/// An inline object or array schema with at least one declared property:
/// the request and response bodies that get a synthesized definition.
pub fn is_local_model(schema: &SchemaOrRef) -> bool {
    match schema {
        SchemaOrRef::Ref { .. } => false,
        SchemaOrRef::Schema(s) => {
            matches!(s.schema_type, Some(SchemaType::Object | SchemaType::Array))
                && !s.properties.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(yaml: &str) -> SchemaOrRef {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_reference_wins_over_type() {
        let s = schema("type: object\n$ref: '#/components/schemas/ToDoItem'\n");
        assert_eq!(SchemaShape::of(&s), SchemaShape::Reference("ToDoItem"));
        assert!(!is_local_model(&s));
    }

    #[test]
    fn test_shapes() {
        assert!(matches!(
            SchemaShape::of(&schema("type: object\nproperties:\n  a:\n    type: string\n")),
            SchemaShape::Object(props) if props.len() == 1
        ));
        assert!(matches!(
            SchemaShape::of(&schema("type: array\nitems:\n  type: string\n")),
            SchemaShape::Array(Some(_))
        ));
        assert_eq!(
            SchemaShape::of(&schema("type: array\n")),
            SchemaShape::Array(None)
        );
        assert_eq!(
            SchemaShape::of(&schema("type: potatoes\n")),
            SchemaShape::Primitive("potatoes")
        );
        assert_eq!(
            SchemaShape::of(&schema("description: nothing\n")),
            SchemaShape::Untyped
        );
    }

    #[test]
    fn test_local_model() {
        assert!(is_local_model(&schema(
            "type: object\nproperties:\n  a:\n    type: string\n"
        )));
        assert!(!is_local_model(&schema("type: object\n")));
        assert!(!is_local_model(&schema(
            "type: array\nitems:\n  type: object\n  properties:\n    a:\n      type: string\n"
        )));
        assert!(!is_local_model(&schema("type: string\n")));
    }
}
