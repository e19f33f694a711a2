use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedDocument;

/// Decodes uploads as UTF-8, replacing invalid sequences with U+FFFD.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, document: &UploadedDocument) -> Result<String, FileLoaderError> {
        Ok(String::from_utf8_lossy(&document.data).into_owned())
    }
}
