use axum::http::StatusCode;

use resume_critiquer::application::ports::FileLoaderError;
use resume_critiquer::application::services::CritiqueError;
use resume_critiquer::presentation::handlers::ApiError;

#[test]
fn given_caller_faults_when_mapping_then_returns_bad_request() {
    let errors = [
        CritiqueError::EmptyFile,
        CritiqueError::UnreadableFile(FileLoaderError::ExtractionFailed("x".to_string())),
        CritiqueError::NoExtractableText,
        CritiqueError::MissingResumeText,
    ];

    for error in errors {
        assert_eq!(ApiError::from(error).status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn given_credential_faults_when_mapping_then_returns_service_unavailable() {
    let missing = ApiError::from(CritiqueError::MissingCredential);
    let rejected = ApiError::from(CritiqueError::InvalidCredential);

    assert_eq!(missing.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(rejected.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(rejected.to_string().contains("OPENAI_API_KEY"));
}

#[test]
fn given_upstream_fault_when_mapping_then_returns_bad_gateway_with_message() {
    let error = ApiError::from(CritiqueError::Upstream("timeout".to_string()));

    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error.to_string(), "AI service error: timeout");
}

#[test]
fn given_unreadable_file_when_mapping_then_message_names_cause() {
    let error = ApiError::from(CritiqueError::UnreadableFile(
        FileLoaderError::ExtractionFailed("failed to parse PDF: eof".to_string()),
    ));

    assert!(error.to_string().starts_with("Could not read file: "));
    assert!(error.to_string().contains("failed to parse PDF: eof"));
}

#[test]
fn given_body_limit_rejection_when_mapping_then_returns_payload_too_large() {
    let oversized = ApiError::rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".to_string());
    let malformed = ApiError::rejected(StatusCode::BAD_REQUEST, "missing boundary".to_string());

    assert_eq!(oversized.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(oversized.to_string(), "length limit exceeded");
}
