use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Legacy variable consulted when `APP_LLM__API_KEY` is not set.
pub const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub upload: UploadSettings,
    pub cors: CorsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP_*`
    /// environment variables (`__` separates sections, e.g. `APP_LLM__MODEL`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Self::defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if settings.llm.credential().is_none() {
            settings.llm.api_key = std::env::var(FALLBACK_API_KEY_VAR).ok();
        }

        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("llm.temperature", f64::from(DEFAULT_TEMPERATURE))?
            .set_default("llm.max_tokens", i64::from(DEFAULT_MAX_TOKENS))?
            .set_default("upload.max_body_bytes", 10_i64 * 1024 * 1024)?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:3000", "http://127.0.0.1:3000"],
            )?
            .set_default("logging.level", "info,resume_critiquer=debug,tower_http=debug")?
            .set_default("logging.json", false)
    }
}

impl LlmSettings {
    /// The trimmed API key, or `None` when it is missing or blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &self.credential().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
