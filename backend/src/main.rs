//! iScan API - Backend Server

use std::sync::Arc;

use iscan_backend::{config::Config, create_app, AppState, OpenFoodClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "iscan_server=debug,iscan_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting {}", config.project_name);
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Product source: {}", config.openfood.api_url);

    let gateway = OpenFoodClient::new(&config.openfood)?;
    let addr = config.server.socket_addr()?;

    // Create application state
    let state = AppState::new(Arc::new(gateway), config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
