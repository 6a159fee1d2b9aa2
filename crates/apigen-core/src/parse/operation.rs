use indexmap::IndexMap;
use serde::Deserialize;

use super::parameter::ParameterOrRef;
use super::request_body::RequestBodyOrRef;
use super::response::ResponseOrRef;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBodyOrRef>,
    #[serde(default)]
    pub responses: IndexMap<String, ResponseOrRef>,
}

/// A path item, containing operations keyed by HTTP method.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation under this path.
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,

    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Names of the declared verbs the definition pipeline does not handle.
    pub fn unsupported_verbs(&self) -> Vec<&'static str> {
        [
            ("patch", self.patch.is_some()),
            ("options", self.options.is_some()),
            ("head", self.head.is_some()),
            ("trace", self.trace.is_some()),
        ]
        .into_iter()
        .filter_map(|(verb, present)| present.then_some(verb))
        .collect()
    }
}
