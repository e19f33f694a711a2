use resume_critiquer::presentation::config::FALLBACK_API_KEY_VAR;
use resume_critiquer::presentation::{Environment, Settings};

const PRIMARY_KEY_VAR: &str = "APP_LLM__API_KEY";
const ORIGINS_VAR: &str = "APP_CORS__ALLOWED_ORIGINS";
const MODEL_VAR: &str = "APP_LLM__MODEL";

fn clear_overrides() {
    // SAFETY: only this test mutates these variables and it runs them in sequence.
    unsafe {
        for var in [PRIMARY_KEY_VAR, FALLBACK_API_KEY_VAR, ORIGINS_VAR, MODEL_VAR] {
            std::env::remove_var(var);
        }
    }
}

fn set(var: &str, value: &str) {
    // SAFETY: see `clear_overrides`.
    unsafe { std::env::set_var(var, value) };
}

// Environment variables are process-wide, so every layering case runs in one
// test to keep them from racing each other.
#[test]
fn given_layered_sources_when_loading_settings_then_applies_precedence() {
    clear_overrides();
    let defaults = Settings::load(Environment::Test).unwrap();
    assert_eq!(defaults.llm.credential(), None);
    assert_eq!(defaults.llm.model, "gpt-4o-mini");
    assert_eq!(defaults.llm.base_url, "https://api.openai.com/v1");
    assert_eq!(defaults.llm.max_tokens, 1000);
    assert_eq!(defaults.server.port, 8000);
    assert_eq!(defaults.upload.max_body_bytes, 10 * 1024 * 1024);
    assert_eq!(
        defaults.cors.allowed_origins,
        vec!["http://localhost:3000", "http://127.0.0.1:3000"]
    );

    set(FALLBACK_API_KEY_VAR, "sk-fallback");
    let fallback_only = Settings::load(Environment::Test).unwrap();
    assert_eq!(fallback_only.llm.credential(), Some("sk-fallback"));

    set(PRIMARY_KEY_VAR, "sk-primary");
    let both = Settings::load(Environment::Test).unwrap();
    assert_eq!(both.llm.credential(), Some("sk-primary"));

    set(PRIMARY_KEY_VAR, "   ");
    let blank_primary = Settings::load(Environment::Test).unwrap();
    assert_eq!(blank_primary.llm.credential(), Some("sk-fallback"));

    set(ORIGINS_VAR, "http://a.example,http://b.example");
    set(MODEL_VAR, "m1");
    let overridden = Settings::load(Environment::Test).unwrap();
    assert_eq!(
        overridden.cors.allowed_origins,
        vec!["http://a.example", "http://b.example"]
    );
    assert_eq!(overridden.llm.model, "m1");

    clear_overrides();
}
