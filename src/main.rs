use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use translate_api::config::Config;
use translate_api::detect::WhatlangDetector;
use translate_api::routes::{create_router, AppState};
use translate_api::translator::GoogleTranslator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translate_api=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    let state = AppState {
        detector: Arc::new(WhatlangDetector::new()),
        translator: Arc::new(GoogleTranslator::new(&config)?),
    };
    let app = create_router(&config, state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST and PORT do not form a valid socket address")?;
    info!("Translation API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
