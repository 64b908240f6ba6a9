use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use lithos_core::error::CoreError;
use lithos_rules::error::RulesError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => {
                tracing::debug!("rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<RulesError> for ApiError {
    fn from(e: RulesError) -> Self {
        match e {
            RulesError::UnknownProtocol(id) => {
                ApiError::NotFound(format!("stone type not found: {id}"))
            }
            RulesError::Record(e) => e.into(),
        }
    }
}
