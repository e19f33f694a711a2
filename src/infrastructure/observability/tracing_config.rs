use crate::presentation::config::{Environment, Settings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, settings: &Settings) -> Self {
        Self {
            environment,
            json_format: settings.logging.json,
            default_filter: settings.logging.level.clone(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            default_filter: "info,resume_critiquer=debug,tower_http=debug".to_string(),
        }
    }
}
