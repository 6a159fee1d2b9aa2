use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// Request payloads keyed by content type. The generated signatures always
/// take the body argument, so `required` is not modelled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestBodyOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    RequestBody(RequestBody),
}
