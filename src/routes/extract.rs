//! Text extraction routes
//!
//! POST /extract-text accepts a multipart form with a single `file` part
//! containing a PDF and responds with the concatenated text of every page.

use axum::{
    extract::Multipart,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::pdf;

/// Create the extraction router
pub fn router() -> Router {
    Router::new().route("/extract-text", post(extract_text))
}

/// Success response body
#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// POST /extract-text
///
/// Reads the uploaded PDF fully into memory, extracts the text of every
/// page in order, and returns the concatenation. Any failure - missing
/// `file` part, unreadable body, malformed PDF - is reported as HTTP 500
/// with an `{"error": ...}` body.
async fn extract_text(multipart: Multipart) -> Result<Json<ExtractResponse>> {
    let upload = read_file_part(multipart).await?;

    let extracted = pdf::extract_text(&upload)?;

    tracing::debug!(
        upload_bytes = upload.len(),
        pages = extracted.page_count,
        text_bytes = extracted.text.len(),
        "extracted text from upload"
    );

    Ok(Json(ExtractResponse {
        text: extracted.text,
    }))
}

/// Read the `file` part of the multipart form fully into memory.
///
/// Parts with any other name are skipped. The upload is owned by this
/// request and dropped once the response is built.
async fn read_file_part(mut multipart: Multipart) -> Result<Vec<u8>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let data = field.bytes().await?;
            return Ok(data.to_vec());
        }
    }

    Err(AppError::MissingFile)
}
