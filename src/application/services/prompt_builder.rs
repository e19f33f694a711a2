/// Upper bound on resume characters forwarded to the completion API.
pub const MAX_RESUME_CHARS: usize = 14_000;

pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert resume reviewer with years of experience in HR and recruitment.";

const DEFAULT_ROLE: &str = "general job applications";

/// Renders the review instruction for a resume.
///
/// The resume is cut to [`MAX_RESUME_CHARS`] characters. A missing or blank
/// `job_role` falls back to a generic target.
pub fn build_prompt(resume_text: &str, job_role: Option<&str>) -> String {
    let role = job_role
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_ROLE);

    format!(
        "Please analyze this resume and provide constructive feedback.
Focus on the following aspects:
1. Content clarity and impact
2. Skills presentation
3. Experience description
4. Specific improvements for {role}

Resume content:
{resume}

Please provide your analysis in a clear, structured format with specific recommendations.",
        resume = truncate_chars(resume_text, MAX_RESUME_CHARS),
    )
}

pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
