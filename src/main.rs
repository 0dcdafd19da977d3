//! Bibliomanager server
//!
//! Opens the store, serves the HTTP adapter, and closes the store on exit.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliomanager::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("Starting Bibliomanager v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::connect(&config.database)
        .await
        .context("Failed to open database")?;

    tracing::info!("Database ready at {}", config.database.url);

    let result = serve(config, repository.clone()).await;

    repository.close().await;
    tracing::info!("Database closed");

    result
}

async fn serve(config: AppConfig, repository: Repository) -> anyhow::Result<()> {
    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let services = Services::new(repository, config.loans);
    let state = AppState {
        services: Arc::new(services),
    };

    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bibliomanager={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
