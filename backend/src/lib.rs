//! iScan API - Backend library
//!
//! Looks up food products by barcode in Open Food Facts and returns a
//! health and environmental assessment computed by the shared rating engine.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use external::{GatewayError, OpenFoodClient, ProductGateway};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ProductGateway>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ProductGateway>, config: Config) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root(State(state): State<AppState>) -> String {
    format!("{} v{}", state.config.project_name, env!("CARGO_PKG_VERSION"))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
