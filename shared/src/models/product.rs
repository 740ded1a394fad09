//! Product models
//!
//! `RawProductRecord` is the typed shape the gateway hands to the rating
//! engine. Every field is optional; defaults are applied during analysis.

use serde::{Deserialize, Serialize};

use super::analysis::ProductAnalysis;

/// Nutrition facts per 100g as reported upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Nutriments {
    pub energy_kcal: Option<f64>,
    pub proteins: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub sugars: Option<f64>,
    pub fat: Option<f64>,
    pub saturated_fat: Option<f64>,
    pub salt: Option<f64>,
}

/// Raw product data fetched for a barcode
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawProductRecord {
    // Identity
    pub barcode: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,

    // Descriptive
    pub categories: Option<String>,
    pub countries: Option<String>,
    pub creator: Option<String>,
    pub image_url: Option<String>,
    pub image_ingredients_url: Option<String>,
    pub image_nutrition_url: Option<String>,
    pub ingredients_text: Option<String>,

    // Classification grades
    pub nutri_score_grade: Option<String>,
    pub nutri_score_points: Option<i64>,
    pub nova_group: Option<i64>,
    pub eco_score_grade: Option<String>,
    pub eco_score_points: Option<i64>,

    pub nutriments: Nutriments,

    // Tags
    pub allergens: Vec<String>,
    pub additives: Vec<String>,
    pub labels: Vec<String>,
}

/// Descriptive product information returned alongside the analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSummary {
    pub barcode: String,
    pub brand: String,
    pub category: String,
    pub country: String,
    pub creator: String,
    pub image: String,
    pub image_ingredients: String,
    pub image_nutritions: String,
    pub ingredients: String,
}

impl From<&RawProductRecord> for ProductSummary {
    fn from(record: &RawProductRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        ProductSummary {
            barcode: text(&record.barcode),
            brand: text(&record.brand),
            category: text(&record.categories),
            country: text(&record.countries),
            creator: text(&record.creator),
            image: text(&record.image_url),
            image_ingredients: text(&record.image_ingredients_url),
            image_nutritions: text(&record.image_nutrition_url),
            ingredients: text(&record.ingredients_text),
        }
    }
}

/// Product lookup response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub product: ProductSummary,
    pub analysis: ProductAnalysis,
}
