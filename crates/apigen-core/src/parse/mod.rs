pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod ref_resolve;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod spec;

use std::path::Path;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// Serialization of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything other than `.json`
    /// is read as YAML, which also accepts most JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parse an OpenAPI document in the given format.
pub fn from_str(input: &str, format: DocumentFormat) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = match format {
        DocumentFormat::Yaml => serde_yaml_ng::from_str(input)?,
        DocumentFormat::Json => serde_json::from_str(input)?,
    };
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi));
    }
    Ok(spec)
}

pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    from_str(input, DocumentFormat::Yaml)
}

pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    from_str(input, DocumentFormat::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("api/openapi.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("OPENAPI.JSON")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("openapi.yml")),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("openapi")),
            DocumentFormat::Yaml
        );
    }

    #[test]
    fn test_rejects_swagger_2() {
        let err = from_yaml("swagger: \"2.0\"\nopenapi: \"2.0\"\ninfo: {title: t, version: \"1\"}\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_unknown_keywords_are_ignored() {
        let json = r#"{
            "openapi": "3.1.0",
            "info": {"title": "t", "description": "d", "version": "1"},
            "paths": {
                "/a": {
                    "summary": "shared",
                    "get": {
                        "description": "long form",
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": {"type": "string", "format": "uuid", "nullable": true},
                                        "example": "x"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }"#;
        let spec = from_json(json).unwrap();
        assert_eq!(spec.info.title, "t");
        assert!(spec.paths["/a"].get.is_some());
    }
}
