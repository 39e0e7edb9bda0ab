//! Axum route handler for the analyze endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::{build_analysis_prompt, ANALYZE_SYSTEM};
use crate::analysis::scrape_analysis;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    // Defaulted so a missing field validates as empty (400) instead of
    // failing JSON extraction (422).
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /analyze
///
/// Issues exactly one completion request to the remote model and returns the
/// scraped JSON reply, or the `{"raw": ...}` fallback shape when the reply is
/// not parseable JSON. Only a failed remote call is a hard error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, AppError> {
    if request.resume_text.trim().is_empty() || request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing resume text or job description.".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(&request.resume_text, &request.job_description);

    let reply = state
        .model
        .complete(&prompt, ANALYZE_SYSTEM)
        .await
        .map_err(|e| AppError::RemoteCall(e.to_string()))?;

    info!(reply_chars = reply.len(), "Analysis reply received");

    Ok(Json(scrape_analysis(&reply)))
}
