use crate::application::ports::LlmClientError;

/// Substrings that mark an upstream failure as a rejected credential.
/// Compared against the lowercased error message.
const CREDENTIAL_MARKERS: [&str; 3] = ["401", "invalid_api_key", "incorrect api key"];

/// Turns the text of an upstream failure into a classified error.
///
/// Detection is a substring heuristic over the message; swap this out for a
/// structured check if the provider exposes a stable error code.
pub fn classify_failure(message: &str) -> LlmClientError {
    let message = match message.trim() {
        "" => "Unknown error",
        trimmed => trimmed,
    };

    let lowered = message.to_lowercase();
    if CREDENTIAL_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return LlmClientError::InvalidCredential;
    }

    LlmClientError::Upstream(message.to_string())
}
