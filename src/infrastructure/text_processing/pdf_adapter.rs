use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedDocument;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Page-by-page text extraction for PDF uploads.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        // A page that yields no text still occupies its slot in the output.
        let pages: Vec<String> = (0..page_count)
            .map(|page_index| doc.extract_text(page_index).unwrap_or_default())
            .collect();

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(&document.data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(pages.join("\n").trim().to_string())
    }
}
