//! Axum route handler for the upload endpoint.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract, UploadedDocument};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
}

/// POST /upload
///
/// Accepts a single multipart file field named `resume`, extracts its text,
/// and returns it. Uploads are strictly transient: nothing is kept after the
/// response is written.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }

        let mime = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;

        let size = data.len();
        let document = UploadedDocument::new(data, &mime)?;
        let text = extract(document).await?;

        info!(bytes = size, chars = text.len(), "Resume text extracted");

        return Ok(Json(UploadResponse { text }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
