//! Tests for rating description generation
//!
//! Verifies score bands, pros/cons selection and ordering, and the Russian
//! template.

use shared::{describe, Grade, Language, NovaGroup, ScoreBand};

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn english(
    name: &str,
    score: i32,
    nutri: &str,
    additives: &[String],
    nova: i64,
    eco: &str,
) -> String {
    describe(
        name,
        score,
        Grade::parse(nutri),
        additives,
        NovaGroup::from_value(nova),
        Grade::parse(eco),
        Language::English,
    )
}

// =============================================================================
// Score Bands
// =============================================================================

mod score_bands {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
    }

    #[test]
    fn band_wording_in_headline() {
        let cases = [(70, "high"), (69, "medium"), (40, "medium"), (39, "low")];
        for (score, band) in cases {
            let text = english("Tea", score, "c", &[], 3, "c");
            let expected = format!("Product 'Tea' received a {} rating of {}/100.\n", band, score);
            assert!(text.starts_with(&expected), "unexpected headline: {}", text);
        }
    }
}

// =============================================================================
// Pros and Cons
// =============================================================================

mod pros_and_cons {
    use super::*;

    #[test]
    fn mixed_pros_and_cons() {
        let text = english("Orange Juice", 45, "c", &[], 1, "d");
        assert_eq!(
            text,
            "Product 'Orange Juice' received a medium rating of 45/100.\n\
             Main pros: no additives, minimal processing (NOVA 1).\n\
             Main cons: low eco-score (D)."
        );
    }

    #[test]
    fn all_pros_in_fixed_order() {
        let text = english("Apple", 80, "a", &[], 1, "b");
        assert_eq!(
            text,
            "Product 'Apple' received a high rating of 80/100.\n\
             Main pros: good Nutri-Score (A), no additives, minimal processing (NOVA 1), good eco-score (B).\n"
        );
        assert!(!text.contains("Main cons"));
    }

    #[test]
    fn all_cons_in_fixed_order() {
        let additives = tags(&["en:e150d", "en:e338", "en:e330"]);
        let text = english("Cola", 0, "e", &additives, 4, "d");
        assert_eq!(
            text,
            "Product 'Cola' received a low rating of 0/100.\n\
             Main cons: low Nutri-Score (E), contains additives (3 items), high processing degree (NOVA 4), low eco-score (D)."
        );
        assert!(!text.contains("Main pros"));
    }

    #[test]
    fn middle_grades_are_neither_pro_nor_con() {
        let text = english("Rice", 38, "c", &[], 3, "c");
        assert_eq!(
            text,
            "Product 'Rice' received a low rating of 38/100.\nMain pros: no additives.\n"
        );
    }

    #[test]
    fn unknown_grades_are_not_mentioned() {
        let text = english("Mystery", 10, "unknown", &tags(&["en:e330"]), 2, "not-applicable");
        assert_eq!(
            text,
            "Product 'Mystery' received a low rating of 10/100.\n\
             Main cons: contains additives (1 items)."
        );
    }
}

// =============================================================================
// Russian Template
// =============================================================================

mod russian_template {
    use super::*;

    #[test]
    fn russian_description() {
        let text = describe(
            "Orange Juice",
            45,
            Some(Grade::C),
            &[],
            Some(NovaGroup::Unprocessed),
            Some(Grade::D),
            Language::Russian,
        );
        assert_eq!(
            text,
            "Продукт 'Orange Juice' получил среднюю оценку 45/100.\n\
             Основные плюсы: отсутствие добавок, минимальная обработка (NOVA 1).\n\
             Основные минусы: низкий экологический рейтинг (D)."
        );
    }

    #[test]
    fn russian_additives_count() {
        let text = describe(
            "Cola",
            0,
            Some(Grade::E),
            &tags(&["en:e150d", "en:e338"]),
            Some(NovaGroup::UltraProcessed),
            Some(Grade::E),
            Language::Russian,
        );
        assert!(text.starts_with("Продукт 'Cola' получил низкую оценку 0/100.\n"));
        assert!(text.contains("низкий Nutri-Score (E), наличие добавок (2 шт.), высокая степень обработки (NOVA 4), низкий экологический рейтинг (E)."));
    }
}
