use indexmap::IndexMap;
use serde::Deserialize;

/// A JSON Schema type keyword value.
///
/// Unrecognized keywords are preserved in `Other` so that the type resolver,
/// not the parser, decides whether they are supported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
    #[serde(untagged)]
    Other(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
            SchemaType::Other(other) => other,
        }
    }
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// The component name a reference points at (last segment of the pointer).
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { ref_path } => ref_path.rsplit('/').next(),
            SchemaOrRef::Schema(_) => None,
        }
    }

    /// The inline schema, if this is not a reference.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { .. } => None,
        }
    }

    /// Declared properties; a reference has none of its own.
    pub fn properties(&self) -> Option<&IndexMap<String, SchemaOrRef>> {
        self.as_schema().map(|s| &s.properties)
    }
}

/// A JSON Schema object, restricted to the keywords the pipeline reads.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    pub items: Option<Box<SchemaOrRef>>,
}
