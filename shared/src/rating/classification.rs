//! Categorical health and environmental ratings
//!
//! These use their own weights and are independent of the composite score.

use crate::models::{Grade, NovaGroup, Rating};

fn grade_weight(grade: Option<Grade>) -> i32 {
    match grade {
        Some(Grade::A) => 3,
        Some(Grade::B) => 2,
        Some(Grade::C) => 1,
        Some(Grade::D) => 0,
        Some(Grade::E) => -1,
        None => 0,
    }
}

fn nova_weight(group: Option<NovaGroup>) -> i32 {
    match group {
        Some(NovaGroup::Unprocessed) => 2,
        Some(NovaGroup::ProcessedIngredients) => 1,
        Some(NovaGroup::Processed) => 0,
        Some(NovaGroup::UltraProcessed) => -1,
        None => 0,
    }
}

/// Health rating from Nutri-Score and NOVA group
pub fn health_rating(nutri_grade: Option<Grade>, nova_group: Option<NovaGroup>) -> Rating {
    match grade_weight(nutri_grade) + nova_weight(nova_group) {
        w if w >= 4 => Rating::Good,
        w if w >= 1 => Rating::Moderate,
        _ => Rating::Poor,
    }
}

/// Environmental rating from Eco-Score
pub fn environmental_rating(eco_grade: Option<Grade>) -> Rating {
    match grade_weight(eco_grade) {
        w if w >= 2 => Rating::Good,
        w if w >= 0 => Rating::Moderate,
        _ => Rating::Poor,
    }
}
