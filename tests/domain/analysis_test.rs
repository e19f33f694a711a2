use resume_critiquer::domain::{Analysis, AnalysisRequest};

#[test]
fn given_padded_role_when_reading_target_then_returns_trimmed() {
    let request = AnalysisRequest::new("text".to_string(), Some("  Data Engineer ".to_string()));
    assert_eq!(request.target_role(), Some("Data Engineer"));
}

#[test]
fn given_blank_or_missing_role_when_reading_target_then_returns_none() {
    let blank = AnalysisRequest::new("text".to_string(), Some("   ".to_string()));
    let missing = AnalysisRequest::new("text".to_string(), None);

    assert_eq!(blank.target_role(), None);
    assert_eq!(missing.target_role(), None);
}

#[test]
fn given_analysis_when_serializing_then_has_single_analysis_field() {
    let json = serde_json::to_value(Analysis::new("Looks good".to_string())).unwrap();
    assert_eq!(json, serde_json::json!({ "analysis": "Looks good" }));
}
