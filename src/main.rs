use std::sync::Arc;

use aqi_chatbot_backend::{
    config::Config,
    persona::Persona,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; model calls will fail until it is configured");
    }

    let persona = Persona::load(config.persona_path.as_deref())?;
    let model = GeminiClient::new(&config).context("failed to build Gemini client")?;
    let state = Arc::new(AppState::new(&config, Arc::new(model), persona));

    let app = routes::create_app(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        chat_model = %config.chat_model,
        probe_model = %config.probe_model,
        "AQI chatbot running"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
