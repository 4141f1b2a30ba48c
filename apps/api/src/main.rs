mod auth;
mod config;
mod errors;
mod inflight;
mod jobs;
mod llm_client;
mod resume;
mod routes;
mod state;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::inflight::InFlightRegistry;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portal API v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(config.gemini_base_url.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; resume generation will report a configuration error");
    }

    info!(
        "Simulated delay for login and job search: {}ms",
        config.simulated_delay.as_millis()
    );

    let state = AppState {
        config: config.clone(),
        llm: Arc::new(llm),
        in_flight: InFlightRegistry::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
