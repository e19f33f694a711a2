use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedDocument};

use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Routes an upload to the PDF or plain-text adapter based on its declared
/// format.
///
/// Uploads of unknown format are tried as PDF first and decoded as text if
/// that fails. A PDF error is only surfaced when the caller declared the
/// upload as PDF.
pub struct FormatDispatchLoader {
    pdf: Arc<dyn FileLoader>,
    text: Arc<dyn FileLoader>,
}

impl FormatDispatchLoader {
    pub fn new(pdf: Arc<dyn FileLoader>, text: Arc<dyn FileLoader>) -> Self {
        Self { pdf, text }
    }
}

impl Default for FormatDispatchLoader {
    fn default() -> Self {
        Self::new(Arc::new(PdfAdapter::new()), Arc::new(PlainTextAdapter))
    }
}

#[async_trait]
impl FileLoader for FormatDispatchLoader {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        match document.format() {
            DocumentFormat::Pdf => self.pdf.extract_text(document).await,
            DocumentFormat::Text => self.text.extract_text(document).await,
            DocumentFormat::Unknown => match self.pdf.extract_text(document).await {
                Ok(text) => Ok(text),
                Err(e) => {
                    tracing::debug!(
                        error = %e,
                        content_type = %document.content_type,
                        "PDF extraction failed for undeclared format, decoding as text"
                    );
                    self.text.extract_text(document).await
                }
            },
        }
    }
}
