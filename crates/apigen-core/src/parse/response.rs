use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::MediaType;

/// One status code's payloads. Descriptions are not carried into the
/// definition, so only `content` is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponseOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Response(Response),
}
