use delivery_quote::config::AppConfig;
use delivery_quote::quote::AppState;
use delivery_quote::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        addr = %config.socket_addr(),
        seed = ?config.seed_path(),
        timeout_secs = config.request_timeout.as_secs(),
        "configuration loaded"
    );

    // Initialize application state
    let addr = config.socket_addr();
    let state = Arc::new(AppState::from_config(config).await?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
