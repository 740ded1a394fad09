//! External API integrations

pub mod openfood;

pub use openfood::OpenFoodClient;

use async_trait::async_trait;
use shared::RawProductRecord;
use thiserror::Error;

/// Failures reported by a product data source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("product {barcode} not found")]
    NotFound { barcode: String },

    #[error("upstream request failed: {0}")]
    Transient(String),
}

/// Source of raw product data keyed by barcode
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn fetch_product(&self, barcode: &str) -> Result<RawProductRecord, GatewayError>;
}
