mod failure_classifier;
mod openai_client;

pub use failure_classifier::classify_failure;
pub use openai_client::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, OpenAiClient,
};
