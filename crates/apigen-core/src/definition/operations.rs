use std::fmt;

use serde::Serialize;

use super::schemas::TypeRef;
use super::types::Route;
use crate::transform::name_normalizer::verb_to_identifier;

/// HTTP method of a resolved operation. Declaration order is the fixed
/// precedence in which a route lists its operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Every supported method, in precedence order.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// The verb as it appears as a path item key.
    pub fn as_verb(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved operation, owned by exactly one `Route`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub verb: HttpMethod,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    /// Call arguments. A body argument, when present, is always first;
    /// parameters follow in document order.
    pub arguments: Vec<ArgumentDefinition>,
    pub return_type: ReturnType,
}

impl Operation {
    /// `{RouteIdentifier}{Verb}`, e.g. `ApiTodoIdGet`.
    pub fn interactor_name(&self, route: &Route) -> String {
        format!(
            "{}{}",
            route.identifier(),
            verb_to_identifier(self.verb.as_verb())
        )
    }

    pub fn body_argument(&self) -> Option<&ArgumentDefinition> {
        self.arguments
            .first()
            .filter(|a| a.origin == ArgumentOrigin::Body)
    }
}

/// Where a call argument is bound from in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentOrigin {
    Body,
    Path,
    Query,
    Header,
}

/// One positional argument of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentDefinition {
    pub origin: ArgumentOrigin,
    /// Normalized camelCase name.
    pub name: String,
    /// Name as written in the document.
    pub wire_name: String,
    #[serde(rename = "type")]
    pub arg_type: TypeRef,
    /// False only for optional query and header parameters.
    pub required: bool,
}

/// What an operation returns.
///
/// Only explicitly referenced component schemas produce a value; see
/// `transform::return_type` for the selection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum ReturnType {
    None,
    Single(String),
    ArrayOf(String),
}

impl ReturnType {
    pub fn has_value(&self) -> bool {
        !matches!(self, ReturnType::None)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ReturnType::ArrayOf(_))
    }

    pub fn referenced_type_name(&self) -> Option<&str> {
        match self {
            ReturnType::None => None,
            ReturnType::Single(name) | ReturnType::ArrayOf(name) => Some(name),
        }
    }
}
