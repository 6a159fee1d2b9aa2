use serde::Serialize;

use super::operations::Operation;
use super::schemas::SchemaDefinition;
use crate::transform::name_normalizer::path_to_identifier;

/// The normalized, language-agnostic view of an OpenAPI document that every
/// emission backend consumes.
///
/// Built in one pass from a fully parsed document and never mutated
/// afterwards; backends only ever receive `&Definition`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    pub routes: Vec<Route>,
    pub schemas: Vec<SchemaDefinition>,
}

impl Definition {
    /// Look up a schema definition by its (declared or synthesized) name.
    pub fn schema(&self, name: &str) -> Option<&SchemaDefinition> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Total number of operations across all routes.
    pub fn operation_count(&self) -> usize {
        self.routes.iter().map(|r| r.operations.len()).sum()
    }
}

/// The operations declared under one path template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path_name: String,
    pub operations: Vec<Operation>,
}

impl Route {
    /// Identifier derived from the path, e.g. `/api/Todo/{id}` → `ApiTodoId`.
    pub fn identifier(&self) -> String {
        path_to_identifier(&self.path_name)
    }
}
