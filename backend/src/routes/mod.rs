//! Route definitions for the iScan API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Product lookup and analysis
        .nest("/products", product_routes())
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new().route("/:barcode", get(handlers::get_product))
}
