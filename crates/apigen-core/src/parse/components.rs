use indexmap::IndexMap;
use serde::Deserialize;

use super::parameter::ParameterOrRef;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;
use super::schema::SchemaOrRef;

/// The reusable sections a `$ref` may point into.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Components {
    pub schemas: IndexMap<String, SchemaOrRef>,
    pub responses: IndexMap<String, ResponseOrRef>,
    pub parameters: IndexMap<String, ParameterOrRef>,
    #[serde(rename = "requestBodies")]
    pub request_bodies: IndexMap<String, RequestBodyOrRef>,
}
