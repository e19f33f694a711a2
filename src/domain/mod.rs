mod analysis;
mod document;

pub use analysis::{Analysis, AnalysisRequest};
pub use document::{DocumentFormat, DocumentId, UploadedDocument};
