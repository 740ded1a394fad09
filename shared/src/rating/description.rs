//! Human-readable rating description
//!
//! Text is assembled from a fixed template table keyed by language, score
//! band and reason code.

use crate::models::{Grade, NovaGroup, ScoreBand};
use crate::types::Language;

/// A single pro or con mentioned in the description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    GoodNutriScore(Grade),
    NoAdditives,
    MinimalProcessing,
    GoodEcoScore(Grade),
    LowNutriScore(Grade),
    ContainsAdditives(usize),
    HighProcessing,
    LowEcoScore(Grade),
}

/// Pros in their fixed reporting order
pub fn pros(
    nutri_grade: Option<Grade>,
    additives: &[String],
    nova_group: Option<NovaGroup>,
    eco_grade: Option<Grade>,
) -> Vec<Reason> {
    let mut reasons = Vec::new();
    if let Some(grade) = nutri_grade.filter(Grade::is_good) {
        reasons.push(Reason::GoodNutriScore(grade));
    }
    if additives.is_empty() {
        reasons.push(Reason::NoAdditives);
    }
    if nova_group == Some(NovaGroup::Unprocessed) {
        reasons.push(Reason::MinimalProcessing);
    }
    if let Some(grade) = eco_grade.filter(Grade::is_good) {
        reasons.push(Reason::GoodEcoScore(grade));
    }
    reasons
}

/// Cons in their fixed reporting order
pub fn cons(
    nutri_grade: Option<Grade>,
    additives: &[String],
    nova_group: Option<NovaGroup>,
    eco_grade: Option<Grade>,
) -> Vec<Reason> {
    let mut reasons = Vec::new();
    if let Some(grade) = nutri_grade.filter(Grade::is_low) {
        reasons.push(Reason::LowNutriScore(grade));
    }
    if !additives.is_empty() {
        reasons.push(Reason::ContainsAdditives(additives.len()));
    }
    if nova_group == Some(NovaGroup::UltraProcessed) {
        reasons.push(Reason::HighProcessing);
    }
    if let Some(grade) = eco_grade.filter(Grade::is_low) {
        reasons.push(Reason::LowEcoScore(grade));
    }
    reasons
}

fn band_word(language: Language, band: ScoreBand) -> &'static str {
    match (language, band) {
        (Language::English, ScoreBand::High) => "high",
        (Language::English, ScoreBand::Medium) => "medium",
        (Language::English, ScoreBand::Low) => "low",
        (Language::Russian, ScoreBand::High) => "высокую",
        (Language::Russian, ScoreBand::Medium) => "среднюю",
        (Language::Russian, ScoreBand::Low) => "низкую",
    }
}

fn reason_text(language: Language, reason: Reason) -> String {
    match (language, reason) {
        (Language::English, Reason::GoodNutriScore(g)) => format!("good Nutri-Score ({g})"),
        (Language::English, Reason::NoAdditives) => "no additives".to_string(),
        (Language::English, Reason::MinimalProcessing) => {
            "minimal processing (NOVA 1)".to_string()
        }
        (Language::English, Reason::GoodEcoScore(g)) => format!("good eco-score ({g})"),
        (Language::English, Reason::LowNutriScore(g)) => format!("low Nutri-Score ({g})"),
        (Language::English, Reason::ContainsAdditives(n)) => {
            format!("contains additives ({n} items)")
        }
        (Language::English, Reason::HighProcessing) => {
            "high processing degree (NOVA 4)".to_string()
        }
        (Language::English, Reason::LowEcoScore(g)) => format!("low eco-score ({g})"),

        (Language::Russian, Reason::GoodNutriScore(g)) => format!("хороший Nutri-Score ({g})"),
        (Language::Russian, Reason::NoAdditives) => "отсутствие добавок".to_string(),
        (Language::Russian, Reason::MinimalProcessing) => {
            "минимальная обработка (NOVA 1)".to_string()
        }
        (Language::Russian, Reason::GoodEcoScore(g)) => {
            format!("хороший экологический рейтинг ({g})")
        }
        (Language::Russian, Reason::LowNutriScore(g)) => format!("низкий Nutri-Score ({g})"),
        (Language::Russian, Reason::ContainsAdditives(n)) => {
            format!("наличие добавок ({n} шт.)")
        }
        (Language::Russian, Reason::HighProcessing) => {
            "высокая степень обработки (NOVA 4)".to_string()
        }
        (Language::Russian, Reason::LowEcoScore(g)) => {
            format!("низкий экологический рейтинг ({g})")
        }
    }
}

fn headline(language: Language, product_name: &str, band: ScoreBand, score: i32) -> String {
    let level = band_word(language, band);
    match language {
        Language::English => {
            format!("Product '{product_name}' received a {level} rating of {score}/100.\n")
        }
        Language::Russian => {
            format!("Продукт '{product_name}' получил {level} оценку {score}/100.\n")
        }
    }
}

fn pros_label(language: Language) -> &'static str {
    match language {
        Language::English => "Main pros",
        Language::Russian => "Основные плюсы",
    }
}

fn cons_label(language: Language) -> &'static str {
    match language {
        Language::English => "Main cons",
        Language::Russian => "Основные минусы",
    }
}

fn join_reasons(language: Language, reasons: &[Reason]) -> String {
    reasons
        .iter()
        .map(|reason| reason_text(language, *reason))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate the rating description for a product
pub fn describe(
    product_name: &str,
    score: i32,
    nutri_grade: Option<Grade>,
    additives: &[String],
    nova_group: Option<NovaGroup>,
    eco_grade: Option<Grade>,
    language: Language,
) -> String {
    let band = ScoreBand::from_score(score);
    let mut description = headline(language, product_name, band, score);

    let pros = pros(nutri_grade, additives, nova_group, eco_grade);
    if !pros.is_empty() {
        description.push_str(&format!(
            "{}: {}.\n",
            pros_label(language),
            join_reasons(language, &pros)
        ));
    }

    let cons = cons(nutri_grade, additives, nova_group, eco_grade);
    if !cons.is_empty() {
        description.push_str(&format!(
            "{}: {}.",
            cons_label(language),
            join_reasons(language, &cons)
        ));
    }

    description
}
