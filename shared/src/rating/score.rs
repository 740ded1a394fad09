//! Composite rating score
//!
//! Every lookup table is an exhaustive match; the `None` arm is the fallback
//! used for missing or unrecognized upstream values.

use crate::models::{Grade, NovaGroup, RatingDetails};
use crate::types::Language;

use super::description::describe;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Weighted Nutri-Score contribution (0-60)
pub fn nutri_points(grade: Option<Grade>) -> i32 {
    match grade {
        Some(Grade::A) => 60,
        Some(Grade::B) => 45,
        Some(Grade::C) => 35,
        Some(Grade::D) => 20,
        Some(Grade::E) => 10,
        None => 0,
    }
}

/// +10 when the product has no additives
pub fn additives_bonus(additives: &[String]) -> i32 {
    additives_bonus_for_count(additives.len())
}

/// Same as [`additives_bonus`] when only the number of additives is known
pub fn additives_bonus_for_count(count: usize) -> i32 {
    if count == 0 {
        10
    } else {
        0
    }
}

/// Processing bonus (-10 to +10)
pub fn nova_bonus(group: Option<NovaGroup>) -> i32 {
    match group {
        Some(NovaGroup::Unprocessed) => 10,
        Some(NovaGroup::ProcessedIngredients) => 5,
        Some(NovaGroup::Processed) => 0,
        Some(NovaGroup::UltraProcessed) => -10,
        None => 0,
    }
}

/// Environmental penalty (-15 to 0)
///
/// An unknown grade costs -10, which is less than an explicit `e`.
pub fn eco_penalty(grade: Option<Grade>) -> i32 {
    match grade {
        Some(Grade::A) => 0,
        Some(Grade::B) => -5,
        Some(Grade::C) => -7,
        Some(Grade::D) => -10,
        Some(Grade::E) => -15,
        None => -10,
    }
}

/// Signals that feed the composite score and its description
#[derive(Debug, Clone, Copy)]
pub struct RatingInputs<'a> {
    pub product_name: &'a str,
    pub nutri_grade: Option<Grade>,
    pub additives: &'a [String],
    pub nova_group: Option<NovaGroup>,
    pub eco_grade: Option<Grade>,
}

/// Result of the composite score computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingOutcome {
    pub score: i32,
    pub details: RatingDetails,
    pub description: String,
}

/// Component breakdown for the given signals
pub fn rating_details(
    nutri_grade: Option<Grade>,
    additives_count: usize,
    nova_group: Option<NovaGroup>,
    eco_grade: Option<Grade>,
) -> RatingDetails {
    RatingDetails {
        nutri_score_points: nutri_points(nutri_grade),
        additives_bonus: additives_bonus_for_count(additives_count),
        nova_bonus: nova_bonus(nova_group),
        eco_penalty: eco_penalty(eco_grade),
    }
}

/// Clamp a raw component total into the 0-100 range
pub fn clamp_score(raw: i32) -> i32 {
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Compute the composite score, its breakdown and the description
pub fn compute_rating(inputs: &RatingInputs<'_>, language: Language) -> RatingOutcome {
    let details = rating_details(
        inputs.nutri_grade,
        inputs.additives.len(),
        inputs.nova_group,
        inputs.eco_grade,
    );
    let score = clamp_score(details.raw_total());

    let description = describe(
        inputs.product_name,
        score,
        inputs.nutri_grade,
        inputs.additives,
        inputs.nova_group,
        inputs.eco_grade,
        language,
    );

    RatingOutcome {
        score,
        details,
        description,
    }
}
