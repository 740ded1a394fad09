//! Classification grades and categorical ratings

use serde::{Deserialize, Serialize};

/// Letter grade used by Nutri-Score and Eco-Score (a = best, e = worst)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    /// Parse a grade letter case-insensitively; anything else is unknown
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "a" => Some(Grade::A),
            "b" => Some(Grade::B),
            "c" => Some(Grade::C),
            "d" => Some(Grade::D),
            "e" => Some(Grade::E),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "a",
            Grade::B => "b",
            Grade::C => "c",
            Grade::D => "d",
            Grade::E => "e",
        }
    }

    /// Upper-case letter used inside descriptions
    pub fn letter(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Grade::A | Grade::B)
    }

    pub fn is_low(&self) -> bool {
        matches!(self, Grade::D | Grade::E)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// NOVA food processing classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NovaGroup {
    /// Unprocessed or minimally processed foods
    Unprocessed,
    /// Processed culinary ingredients
    ProcessedIngredients,
    /// Processed foods
    Processed,
    /// Ultra-processed food and drink products
    UltraProcessed,
}

impl NovaGroup {
    /// Map the upstream integer group; values outside 1-4 are unknown
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(NovaGroup::Unprocessed),
            2 => Some(NovaGroup::ProcessedIngredients),
            3 => Some(NovaGroup::Processed),
            4 => Some(NovaGroup::UltraProcessed),
            _ => None,
        }
    }
}

/// Overall health or environmental assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Moderate,
    Poor,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Moderate => "moderate",
            Rating::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite score band used by the rating description
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 70 and above
    High,
    /// 40-69
    Medium,
    /// Below 40
    Low,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 70 => ScoreBand::High,
            s if s >= 40 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }
}
