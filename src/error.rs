//! Error types for the Extracto Server

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::ExtractError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type.
///
/// Every failure mode - missing upload field, unreadable multipart body,
/// extraction failure - collapses to HTTP 500 with an `{"error": ...}` body.
/// The service makes no distinction between bad input and internal errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing `file` field in multipart form")]
    MissingFile,

    #[error("failed to read upload: {0}")]
    Upload(#[from] MultipartError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("extraction request failed: {}", self);

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
