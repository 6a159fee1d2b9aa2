use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("circular reference detected: {0}")]
    CircularRef(String),

    #[error("invalid reference format: {0}")]
    InvalidRefFormat(String),

    #[error("reference target not found: {0}")]
    RefTargetNotFound(String),
}

/// Failures raised while turning a document into a `Definition`.
///
/// All of them are fatal for the run: the first one encountered aborts the
/// traversal and no partial definition is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("unsupported parameter location: {0}")]
    UnsupportedParameterLocation(String),

    #[error("property `{0}` has neither a type nor a reference")]
    MissingPropertyType(String),

    #[error("cyclic schema reference: {0}")]
    CyclicSchemaReference(String),

    #[error("schema name `{0}` is synthesized for two different shapes")]
    SchemaNameCollision(String),

    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("generation failed: {0}")]
    Other(String),
}
