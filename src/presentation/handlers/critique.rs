use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{Analysis, AnalysisRequest};
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
}

/// `POST /critique`: critiques resume text that the caller already extracted.
#[tracing::instrument(skip(state, request))]
pub async fn critique_handler<F, L>(
    State(state): State<AppState<F, L>>,
    request: Result<Json<CritiqueRequest>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    state.critique_service.ensure_available()?;

    let Json(request) = request.map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;

    let analysis = state
        .critique_service
        .critique(&AnalysisRequest::new(
            request.resume_text.unwrap_or_default(),
            request.job_role,
        ))
        .await?;

    Ok(Json(analysis))
}
