use serde::Deserialize;

use super::schema::SchemaOrRef;

/// The schema carried under one content type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaType {
    pub schema: Option<SchemaOrRef>,
}
