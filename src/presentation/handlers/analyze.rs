use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{Analysis, UploadedDocument};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";
const JOB_ROLE_FIELD: &str = "job_role";

struct AnalyzeUpload {
    document: UploadedDocument,
    job_role: Option<String>,
}

/// `POST /analyze`: multipart upload of a resume plus an optional job role.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Analysis>, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    // Checked before the body is touched.
    state.critique_service.ensure_available()?;

    let multipart = multipart.map_err(|e| ApiError::rejected(e.status(), e.body_text()))?;
    let upload = read_upload(multipart).await?;

    tracing::debug!(
        filename = %upload.document.filename,
        content_type = %upload.document.content_type,
        bytes = upload.document.size_bytes(),
        job_role = %sanitize_prompt(upload.job_role.as_deref().unwrap_or_default()),
        "Processing resume upload"
    );

    let analysis = state
        .critique_service
        .critique_upload(&upload.document, upload.job_role)
        .await?;

    Ok(Json(analysis))
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, ApiError> {
    let mut document = None;
    let mut job_role = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read file", e))?;
                document = Some(UploadedDocument::new(filename, content_type, data));
            }
            Some(JOB_ROLE_FIELD) => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error("Failed to read job_role", e))?;
                job_role = Some(value);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
            }
        }
    }

    let document = document.ok_or_else(|| ApiError::InvalidInput("No file uploaded".to_string()))?;

    Ok(AnalyzeUpload { document, job_role })
}

fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    ApiError::rejected(error.status(), format!("{context}: {}", error.body_text()))
}
