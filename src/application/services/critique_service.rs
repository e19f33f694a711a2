use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::application::services::prompt_builder::{SYSTEM_INSTRUCTION, build_prompt};
use crate::domain::{Analysis, AnalysisRequest, UploadedDocument};

pub struct CritiqueService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    llm_client: Option<Arc<L>>,
}

impl<F, L> CritiqueService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    /// `llm_client` is `None` when no API credential is configured; every
    /// critique then fails with [`CritiqueError::MissingCredential`].
    pub fn new(file_loader: Arc<F>, llm_client: Option<Arc<L>>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    pub fn ensure_available(&self) -> Result<&L, CritiqueError> {
        self.llm_client
            .as_deref()
            .ok_or(CritiqueError::MissingCredential)
    }

    #[tracing::instrument(
        skip(self, document, job_role),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = document.format().as_str(),
        )
    )]
    pub async fn critique_upload(
        &self,
        document: &UploadedDocument,
        job_role: Option<String>,
    ) -> Result<Analysis, CritiqueError> {
        self.ensure_available()?;

        if document.is_empty() {
            return Err(CritiqueError::EmptyFile);
        }

        let resume_text = self
            .file_loader
            .extract_text(document)
            .await
            .map_err(CritiqueError::UnreadableFile)?;

        if resume_text.trim().is_empty() {
            return Err(CritiqueError::NoExtractableText);
        }

        tracing::debug!(chars = resume_text.chars().count(), "Resume text extracted");

        self.critique(&AnalysisRequest::new(resume_text, job_role))
            .await
    }

    pub async fn critique(&self, request: &AnalysisRequest) -> Result<Analysis, CritiqueError> {
        let llm_client = self.ensure_available()?;

        if request.resume_text.trim().is_empty() {
            return Err(CritiqueError::MissingResumeText);
        }

        let prompt = build_prompt(&request.resume_text, request.target_role());

        let analysis = llm_client
            .complete(SYSTEM_INSTRUCTION, &prompt)
            .await
            .map_err(|e| match e {
                LlmClientError::InvalidCredential => CritiqueError::InvalidCredential,
                LlmClientError::Upstream(message) => CritiqueError::Upstream(message),
            })?;

        tracing::info!(chars = analysis.len(), "Resume critique complete");

        Ok(Analysis::new(analysis))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CritiqueError {
    #[error("completion API credential is not configured")]
    MissingCredential,
    #[error("file is empty")]
    EmptyFile,
    #[error("could not read file: {0}")]
    UnreadableFile(FileLoaderError),
    #[error("file does not contain extractable text")]
    NoExtractableText,
    #[error("missing resume text")]
    MissingResumeText,
    #[error("completion API rejected the credential")]
    InvalidCredential,
    #[error("upstream: {0}")]
    Upstream(String),
}
