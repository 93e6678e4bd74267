use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use ferry_cars_api::{
    build_router, config::Config, constants::API_NAME, repository::MySqlCarStore,
    service::CarService,
};
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting ferry cars API on port {}", API_NAME, config.server_port);

    let pool = MySqlPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Successfully connected to the database", API_NAME);

    if config.expose_store_errors {
        tracing::warn!("{} Raw database errors will be returned to clients", API_NAME);
    }

    let store = Arc::new(MySqlCarStore::new(pool));
    let service = CarService::new(store, config.expose_store_errors);
    let app = build_router(service, config.cors_origin.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
}
