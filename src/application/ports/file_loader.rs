use async_trait::async_trait;

use crate::domain::UploadedDocument;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
