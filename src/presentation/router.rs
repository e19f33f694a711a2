use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{analyze_handler, critique_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let cors = cors_layer(&state.settings.cors);
    let body_limit = DefaultBodyLimit::max(state.settings.upload.max_body_bytes);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler::<F, L>))
        .route("/critique", post(critique_handler::<F, L>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

/// Browser callers are limited to the configured origins. Credentials are
/// allowed, so methods and headers mirror the preflight instead of using `*`.
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter_map(|origin| {
            // tower-http refuses a wildcard alongside credentials.
            if origin == "*" {
                tracing::warn!("Skipping wildcard CORS origin; list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
