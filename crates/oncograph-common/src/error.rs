use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OncographError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OncographError>;

/// HTTP-facing wrapper so handlers can `?` domain errors straight
/// into a response.
#[derive(Debug)]
pub struct ApiError(pub OncographError);

impl From<OncographError> for ApiError {
    fn from(err: OncographError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            OncographError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Wire contract: unknown patients surface as a structured
            // {"error": "Patient not found"} body, never a crash.
            OncographError::PatientNotFound(_) => {
                (StatusCode::NOT_FOUND, "Patient not found".to_string())
            }
            OncographError::Serialization(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            OncographError::Config(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            OncographError::Other(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
