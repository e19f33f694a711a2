use bytes::Bytes;
use uuid::Uuid;

/// A file received from a caller. Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Text,
    Unknown,
}

impl DocumentFormat {
    /// Classifies an upload from its declared media type and filename.
    ///
    /// Both inputs are untrusted. The PDF check wins over the text check, and
    /// anything matching neither is `Unknown`.
    pub fn detect(content_type: &str, filename: &str) -> Self {
        let content_type = content_type.trim().to_lowercase();
        let filename = filename.trim().to_lowercase();

        if content_type == "application/pdf" || filename.ends_with(".pdf") {
            Self::Pdf
        } else if content_type.contains("text") || filename.ends_with(".txt") {
            Self::Text
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "text",
            Self::Unknown => "unknown",
        }
    }
}

impl UploadedDocument {
    pub fn new(filename: String, content_type: String, data: impl Into<Bytes>) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            data: data.into(),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::detect(&self.content_type, &self.filename)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
