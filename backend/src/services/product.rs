//! Product lookup service
//!
//! Fetches raw product data through the configured gateway and runs it
//! through the rating engine.

use std::sync::Arc;

use shared::{analyze_with_language, validate_barcode, Language, ProductResponse, ProductSummary};

use crate::error::{AppError, AppResult};
use crate::external::ProductGateway;

/// Service combining the upstream gateway with the rating engine
#[derive(Clone)]
pub struct ProductService {
    gateway: Arc<dyn ProductGateway>,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    /// Look up a product by barcode and analyze it
    pub async fn lookup(&self, barcode: &str, language: Language) -> AppResult<ProductResponse> {
        validate_barcode(barcode).map_err(|message| AppError::Validation {
            field: "barcode".to_string(),
            message: message.to_string(),
            message_ru: "Некорректный штрихкод".to_string(),
        })?;

        let record = self.gateway.fetch_product(barcode).await?;

        let product = ProductSummary::from(&record);
        let analysis = analyze_with_language(&record, language);

        tracing::debug!(
            barcode,
            score = analysis.rating_score,
            health = %analysis.health_rating,
            environment = %analysis.environmental_rating,
            "product analyzed"
        );

        Ok(ProductResponse { product, analysis })
    }
}
