//! WebAssembly module for the iScan platform
//!
//! Provides client-side computation for:
//! - Full product analysis from a raw product record
//! - Composite rating score calculation
//! - Health and environmental ratings
//! - Barcode validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Analyze a raw product record given as JSON and return the analysis as JSON
#[wasm_bindgen]
pub fn analyze_product_json(record_json: &str, lang: &str) -> Result<String, JsValue> {
    let record: RawProductRecord = serde_json::from_str(record_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid product JSON: {}", e)))?;

    let language = Language::from_code(lang).unwrap_or_default();
    let analysis = shared::analyze_with_language(&record, language);

    serde_json::to_string(&analysis)
        .map_err(|e| JsValue::from_str(&format!("Failed to encode analysis: {}", e)))
}

/// Calculate the composite rating score (0-100)
#[wasm_bindgen]
pub fn calculate_rating_score(
    nutri_grade: &str,
    additives_count: u32,
    nova_group: i32,
    eco_grade: &str,
) -> i32 {
    let details = shared::rating_details(
        Grade::parse(nutri_grade),
        additives_count as usize,
        NovaGroup::from_value(i64::from(nova_group)),
        Grade::parse(eco_grade),
    );
    shared::clamp_score(details.raw_total())
}

/// Health rating ("good", "moderate", "poor") from Nutri-Score and NOVA group
#[wasm_bindgen]
pub fn health_rating_for(nutri_grade: &str, nova_group: i32) -> String {
    shared::health_rating(
        Grade::parse(nutri_grade),
        NovaGroup::from_value(i64::from(nova_group)),
    )
    .to_string()
}

/// Environmental rating ("good", "moderate", "poor") from Eco-Score
#[wasm_bindgen]
pub fn environmental_rating_for(eco_grade: &str) -> String {
    shared::environmental_rating(Grade::parse(eco_grade)).to_string()
}

/// Check barcode format before sending a lookup request
#[wasm_bindgen]
pub fn is_valid_barcode(barcode: &str) -> bool {
    validate_barcode(barcode).is_ok()
}
