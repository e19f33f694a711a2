use resume_critiquer::application::ports::FileLoader;
use resume_critiquer::domain::UploadedDocument;
use resume_critiquer::infrastructure::text_processing::PlainTextAdapter;

fn document(filename: &str, content_type: &str, data: &[u8]) -> UploadedDocument {
    UploadedDocument::new(filename.to_string(), content_type.to_string(), data.to_vec())
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_content_unchanged() {
    let content = "  Jane Doe\n\nSkills: Rust, Go  \n";
    let upload = document("resume.txt", "text/plain", content.as_bytes());

    let result = PlainTextAdapter.extract_text(&upload).await;

    assert_eq!(result.unwrap(), content);
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_replaces_with_marker() {
    let upload = document("broken.txt", "text/plain", &[b'o', b'k', 0xFF, 0xFE, b'!']);

    let result = PlainTextAdapter.extract_text(&upload).await.unwrap();

    assert_eq!(result, "ok\u{FFFD}\u{FFFD}!");
}

#[tokio::test]
async fn given_undeclared_format_when_extracting_then_decodes_anyway() {
    let upload = document("", "", b"raw bytes");

    let result = PlainTextAdapter.extract_text(&upload).await;

    assert_eq!(result.unwrap(), "raw bytes");
}

#[tokio::test]
async fn given_pdf_declared_document_when_decoding_then_returns_bytes_as_text() {
    let upload = document("resume.pdf", "application/pdf", b"%PDF-1.4");

    let result = PlainTextAdapter.extract_text(&upload).await;

    assert_eq!(result.unwrap(), "%PDF-1.4");
}
