use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors from fetching and reshaping mentions.
///
/// Every variant is reported to HTTP callers as the same 500 response; only the
/// `details` payload differs.
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("no bearer token configured for the search API")]
    MissingCredential,

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}")]
    UpstreamStatus { status: u16, details: Value },

    #[error("malformed upstream data: {0}")]
    UpstreamData(String),
}

impl MentionError {
    /// Payload describing the failure, passed through to callers as `details`.
    ///
    /// For upstream status errors this is the upstream body itself.
    #[must_use]
    pub fn details(&self) -> Value {
        match self {
            Self::UpstreamStatus { details, .. } => details.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for MentionError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": "Failed to fetch tweets",
            "details": self.details(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
