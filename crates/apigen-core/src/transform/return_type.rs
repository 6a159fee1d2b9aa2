use indexmap::IndexMap;

use crate::definition::ReturnType;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;

/// Determine what an operation returns.
///
/// Only the first response entry and its first content entry are looked at,
/// in document order; status codes and media types play no part. A value is
/// produced only for a referenced component schema or an array whose items
/// are one. Inline response bodies yield `ReturnType::None` here even though
/// the schema definition pass still synthesizes a definition for them.
pub fn resolve_return_type(responses: &IndexMap<String, ResponseOrRef>) -> ReturnType {
    let Some((_, response)) = responses.first() else {
        return ReturnType::None;
    };

    let content = match response {
        ResponseOrRef::Response(r) => &r.content,
        ResponseOrRef::Ref { .. } => return ReturnType::None, // Should already be resolved
    };

    let Some(schema) = content.first().and_then(|(_, mt)| mt.schema.as_ref()) else {
        return ReturnType::None;
    };

    if let Some(name) = schema.ref_name() {
        return ReturnType::Single(name.to_string());
    }

    match schema
        .as_schema()
        .and_then(|s| s.items.as_deref())
        .and_then(SchemaOrRef::ref_name)
    {
        Some(name) => ReturnType::ArrayOf(name.to_string()),
        None => ReturnType::None,
    }
}
