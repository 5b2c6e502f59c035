use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::parsing::js_string;

/// Body of `POST /v1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub topic: String,
}

impl RoadmapRequest {
    /// Reads `topic` from any JSON body without validating it.
    ///
    /// Non-string values keep their loose string form (`42`, `undefined` when absent).
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        Self {
            topic: js_string(body.get("topic")),
        }
    }
}

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub message: String,
    pub api_key_present: bool,
    pub api_key_prefix: String,
}
