use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Remote model error: {0}")]
    RemoteCall(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedFormat(mime) => {
                tracing::warn!("Rejected upload with MIME type {mime:?}");
                (
                    StatusCode::BAD_REQUEST,
                    "Only PDF and DOCX files are allowed.".to_string(),
                )
            }
            AppError::Extraction(msg) => {
                tracing::error!("Text extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to extract text from file.".to_string(),
                )
            }
            AppError::RemoteCall(msg) => {
                tracing::error!("AI analysis error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze resume.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
