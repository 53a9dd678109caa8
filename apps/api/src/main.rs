mod config;
mod errors;
mod export;
mod github;
mod llm_client;
mod models;
mod render;
mod resume;
mod routes;
mod state;
mod stats;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::raster::Rasterizer;
use crate::github::GithubClient;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::{AppState, ResumeSlot};

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

    info!("Starting Octoresume API v{}", env!("CARGO_PKG_VERSION"));

    // GitHub client
    let github = GithubClient::new(config.github_api_base.clone());
    info!("GitHub client initialized ({})", config.github_api_base);

    // Description generator
    let generator = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Gemini client initialized");

    // Export rasterizer — load the font up front so a bad path fails at
    // startup, not on the first export.
    let rasterizer = Arc::new(Rasterizer::from_path(&config.font_path)?);
    info!("Rasterizer initialized (font: {})", config.font_path);

    // Build app state
    let state = AppState {
        github,
        generator,
        rasterizer,
        resume: Arc::new(tokio::sync::RwLock::new(ResumeSlot::default())),
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
