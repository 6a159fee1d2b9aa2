use crate::definition::PrimitiveType;
use crate::error::TransformError;

/// Map an OpenAPI type name to a primitive, if it is one we support.
///
/// Callers that only use this as a heuristic (is this array of a primitive?)
/// look at the `Option`; callers that need a type use [`require_primitive`].
pub fn resolve_primitive(type_name: &str) -> Option<PrimitiveType> {
    match type_name {
        "integer" => Some(PrimitiveType::Int32),
        "string" => Some(PrimitiveType::Text),
        "boolean" => Some(PrimitiveType::Bool),
        _ => None,
    }
}

/// Like [`resolve_primitive`], failing with `UnsupportedType` when the name
/// is not a supported primitive.
pub fn require_primitive(type_name: &str) -> Result<PrimitiveType, TransformError> {
    resolve_primitive(type_name)
        .ok_or_else(|| TransformError::UnsupportedType(type_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_primitives() {
        assert_eq!(resolve_primitive("integer"), Some(PrimitiveType::Int32));
        assert_eq!(resolve_primitive("string"), Some(PrimitiveType::Text));
        assert_eq!(resolve_primitive("boolean"), Some(PrimitiveType::Bool));
    }

    #[test]
    fn test_unknown_types() {
        assert_eq!(resolve_primitive("number"), None);
        assert_eq!(resolve_primitive("object"), None);
        assert_eq!(resolve_primitive("Integer"), None);
        assert_eq!(
            require_primitive("potatoes"),
            Err(TransformError::UnsupportedType("potatoes".to_string()))
        );
    }
}
