//! Recipebox HTTP Server
//!
//! Serves CRUD operations over an in-memory recipe store.

use anyhow::{Context, Result};
use recipebox_server::{api, config::ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let (config, fallback) = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config)?;
    if let Some(reason) = fallback {
        info!("{}, using default configuration", reason);
    }
    info!("Loaded configuration: {:?}", config);

    // Initialize store
    let store = Arc::new(config.build_store());
    info!(
        "Recipe store initialized with {} recipe(s), id strategy {:?}",
        store.len().await,
        config.id_strategy
    );

    let app = api::create_router(store);

    // Start server
    let addr = config.listen_addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Recipes API: http://{}/recipes", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    let default_filter = format!(
        "recipebox_server={level},recipebox_core={level},tower_http=debug",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
