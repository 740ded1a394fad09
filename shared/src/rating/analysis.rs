//! Raw record to product analysis
//!
//! Missing values never fail the analysis: letter grades default to `e`,
//! points to 0, the NOVA group to 4 and nutriments to 0.

use crate::models::{Grade, NovaGroup, ProductAnalysis, RawProductRecord};
use crate::types::Language;
use crate::validation::normalize_labels;

use super::classification::{environmental_rating, health_rating};
use super::score::{compute_rating, RatingInputs};

pub const DEFAULT_GRADE: &str = "e";
pub const DEFAULT_NOVA_GROUP: i64 = 4;

/// Lower-cased grade string, defaulting to the worst grade
pub fn normalize_grade(raw: Option<&str>) -> String {
    raw.map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_GRADE.to_string())
}

/// Analyze a product using the default description language
pub fn analyze(record: &RawProductRecord) -> ProductAnalysis {
    analyze_with_language(record, Language::default())
}

/// Analyze a product, rendering the description in `language`
pub fn analyze_with_language(record: &RawProductRecord, language: Language) -> ProductAnalysis {
    let name = record.name.clone().unwrap_or_default();

    let nutri_score = normalize_grade(record.nutri_score_grade.as_deref());
    let eco_score = normalize_grade(record.eco_score_grade.as_deref());
    let nova_group = record.nova_group.unwrap_or(DEFAULT_NOVA_GROUP);

    let nutri_grade = Grade::parse(&nutri_score);
    let eco_grade = Grade::parse(&eco_score);
    let nova = NovaGroup::from_value(nova_group);

    let outcome = compute_rating(
        &RatingInputs {
            product_name: &name,
            nutri_grade,
            additives: &record.additives,
            nova_group: nova,
            eco_grade,
        },
        language,
    );

    let nutriments = &record.nutriments;

    ProductAnalysis {
        barcode: record.barcode.clone().unwrap_or_default(),
        brand: record.brand.clone().unwrap_or_default(),
        nutri_score,
        nutri_score_points: record.nutri_score_points.unwrap_or(0),
        nova_group,
        energy_kcal: nutriments.energy_kcal.unwrap_or(0.0),
        proteins: nutriments.proteins.unwrap_or(0.0),
        carbohydrates: nutriments.carbohydrates.unwrap_or(0.0),
        sugars: nutriments.sugars.unwrap_or(0.0),
        fat: nutriments.fat.unwrap_or(0.0),
        saturated_fat: nutriments.saturated_fat.unwrap_or(0.0),
        salt: nutriments.salt.unwrap_or(0.0),
        allergens: record.allergens.clone(),
        additives: record.additives.clone(),
        eco_score,
        eco_score_points: record.eco_score_points.unwrap_or(0),
        labels: normalize_labels(&record.labels),
        rating_score: outcome.score,
        rating_description: outcome.description,
        rating_details: outcome.details,
        health_rating: health_rating(nutri_grade, nova),
        environmental_rating: environmental_rating(eco_grade),
        name,
    }
}
