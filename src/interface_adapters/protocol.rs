use serde::{Deserialize, Serialize};

// Query parameters for index conversion. Kept as raw strings so presence
// and numeric validation are decided by the use case.
#[derive(Debug, Deserialize)]
pub struct H3Query {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub resolution: Option<String>,
}

// Response payload carrying the resolved cell identifier.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct H3IndexResponse {
    pub h3_index: String,
}

// JSON error envelope; `details` is only present for internal failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
