//! Error handling for the API.
//!
//! Every error body is `{"error": "<message>"}`; the message from the core
//! layer is surfaced to the client unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing/invalid data or a duplicate.
    BadRequest(String),
    /// A referenced row does not exist.
    NotFound(String),
    /// Unhandled storage error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<starcat_core::Error> for AppError {
    fn from(err: starcat_core::Error) -> Self {
        match err {
            starcat_core::Error::NotFound(msg) => AppError::NotFound(msg),
            starcat_core::Error::Conflict(msg) => AppError::BadRequest(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}
