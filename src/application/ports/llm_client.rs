use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a system instruction and a user prompt as a two-turn chat and
    /// returns the generated text. A response without content is `Ok("")`.
    async fn complete(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("invalid credential")]
    InvalidCredential,
    #[error("{0}")]
    Upstream(String),
}
