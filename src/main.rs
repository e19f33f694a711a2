use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use resume_critiquer::application::services::CritiqueService;
use resume_critiquer::infrastructure::llm::OpenAiClient;
use resume_critiquer::infrastructure::observability::{TracingConfig, init_tracing};
use resume_critiquer::infrastructure::text_processing::FormatDispatchLoader;
use resume_critiquer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server host/port")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings), addr);

    let llm_client = OpenAiClient::from_settings(&settings.llm).map(Arc::new);
    match &llm_client {
        Some(client) => tracing::info!(model = client.model(), "Completion client configured"),
        None => tracing::warn!(
            "No LLM API key configured; /analyze will answer 503 until one is set"
        ),
    }

    let critique_service =
        CritiqueService::new(Arc::new(FormatDispatchLoader::default()), llm_client);
    let router = create_router(AppState::new(critique_service, settings));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
