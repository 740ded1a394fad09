//! Product analysis models

use serde::{Deserialize, Serialize};

use super::grade::Rating;

/// Breakdown of the composite rating score
///
/// `nutri_score_points` holds the weighted Nutri-Score contribution, not the
/// upstream Nutri-Score points. The key name is part of the response format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingDetails {
    pub nutri_score_points: i32,
    pub additives_bonus: i32,
    pub nova_bonus: i32,
    pub eco_penalty: i32,
}

impl RatingDetails {
    /// Sum of all components before clamping
    pub fn raw_total(&self) -> i32 {
        self.nutri_score_points + self.additives_bonus + self.nova_bonus + self.eco_penalty
    }
}

/// Analyzed product with scores and ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductAnalysis {
    pub barcode: String,
    pub name: String,
    pub brand: String,

    // Health indicators
    pub nutri_score: String,
    pub nutri_score_points: i64,
    pub nova_group: i64,

    // Nutritional values per 100g
    pub energy_kcal: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub sugars: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub salt: f64,

    // Health warnings
    pub allergens: Vec<String>,
    pub additives: Vec<String>,

    // Environmental impact
    pub eco_score: String,
    pub eco_score_points: i64,

    // Labels and certifications
    pub labels: Vec<String>,

    // Product rating
    pub rating_score: i32,
    pub rating_description: String,
    pub rating_details: RatingDetails,

    // Overall assessment
    pub health_rating: Rating,
    pub environmental_rating: Rating,
}
