//! HTTP handlers for product lookup endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{Language, ProductResponse};

use crate::{error::AppResult, services::ProductService, AppState};

/// Query parameters for product lookup
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Description language: "en" or "ru"
    pub lang: Option<String>,
}

/// Get product information and analysis by barcode
pub async fn get_product(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductResponse>> {
    let language = query
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_else(|| state.config.analysis.language());

    let service = ProductService::new(state.gateway);
    let response = service.lookup(&barcode, language).await?;
    Ok(Json(response))
}
