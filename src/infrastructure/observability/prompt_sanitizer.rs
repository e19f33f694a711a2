use crate::application::services::prompt_builder::truncate_chars;

const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Prepares caller-supplied text for a log line: trims it, caps its length and
/// masks anything that looks like a secret.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        format!(
            "{}... ({} chars total)",
            truncate_chars(trimmed, MAX_VISIBLE_CHARS),
            total_chars
        )
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for prefix in SECRET_PREFIXES {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(prefix) {
            let value_start = search_from + found + prefix.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}
