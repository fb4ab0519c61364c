use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failure classes of the advisor proxy. Each maps to one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("messages must be a non-empty array")]
    EmptyMessages,
    #[error("max_tokens must be a positive number")]
    InvalidMaxTokens,
    #[error("messages payload is too large ({length} characters, limit {limit})")]
    PayloadTooLarge { length: usize, limit: usize },
    #[error("advisor is not configured: {0} is missing")]
    MissingConfiguration(&'static str),
    #[error("completion service returned an error")]
    Upstream { status: u16 },
    #[error("completion service returned an invalid response")]
    MalformedUpstream,
    #[error("completion service request failed")]
    Transport(String),
}

impl AdvisorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::InvalidBody(_)
            | AdvisorError::EmptyMessages
            | AdvisorError::InvalidMaxTokens => StatusCode::BAD_REQUEST,
            AdvisorError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AdvisorError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AdvisorError::MissingConfiguration(_)
            | AdvisorError::MalformedUpstream
            | AdvisorError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
