use enformion_proxy::config::Config;
use enformion_proxy::handlers::AppState;
use enformion_proxy::routes::build_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading (fails fast without credentials).
/// - The shared upstream client.
/// - HTTP routes and middleware (CORS, body limit, tracing).
///
/// It then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG wins; LOG_LEVEL is the coarse fallback
    let level = std::env::var("LOG_LEVEL")
        .map(|l| l.to_lowercase())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("enformion_proxy={level},tower_http={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let state = AppState::new(config.clone())?;
    tracing::info!(
        "✓ Upstream client initialized (timeout {}s)",
        config.upstream_timeout.as_secs()
    );

    let app = build_router(Arc::new(state));

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
