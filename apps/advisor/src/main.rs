mod analysis;
mod config;
mod document;
mod errors;
mod llm_client;
mod market;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::market::MarketData;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Career Advisor v{}", env!("CARGO_PKG_VERSION"));

    // Market reference data is read-only from here on
    let market = MarketData::load(config.market_data_path.as_deref())?;
    info!(
        "Market data ready: {} high-demand skills, {} growing fields",
        market.high_demand_skills.len(),
        market.growing_fields.len()
    );

    // Initialize LLM client
    let mut llm = LlmClient::new(config.gemini_api_key.clone(), config.llm_timeout);
    if let Some(base_url) = &config.gemini_base_url {
        info!("Using Gemini API root {base_url}");
        llm = llm.with_base_url(base_url.clone());
    }
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout.as_secs()
    );

    let state = AppState {
        generator: Arc::new(llm),
        market: Arc::new(market),
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
