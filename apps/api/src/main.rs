mod config;
mod errors;
mod llm_client;
mod models;
mod pipeline;
mod routes;
mod scanner;
mod screening;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::screening::{AlwaysLegitimate, LlmVerdictProvider, VerdictProvider};
use crate::state::AppState;
use crate::store::JobStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KenyaDevJobs API v{}", env!("CARGO_PKG_VERSION"));

    // Load the immutable job store (fails fast on a duplicate id)
    let store = Arc::new(JobStore::seeded()?);
    info!("Job store loaded: {} postings", store.all().len());

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Verdict provider: LLM by default, deterministic stub via DISABLE_AI_SCREENING
    let verdicts: Arc<dyn VerdictProvider> = if config.disable_ai_screening {
        info!("AI screening disabled; every posting passes the legitimacy gate");
        Arc::new(AlwaysLegitimate)
    } else {
        Arc::new(LlmVerdictProvider(llm.clone()))
    };

    // Build app state
    let state = AppState {
        store,
        llm,
        verdicts,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
