//! Product rating engine
//!
//! Pure, synchronous functions that turn a `RawProductRecord` into a
//! `ProductAnalysis`. Nothing in here performs I/O or can fail.

pub mod analysis;
pub mod classification;
pub mod description;
pub mod score;

pub use analysis::{analyze, analyze_with_language, normalize_grade};
pub use classification::{environmental_rating, health_rating};
pub use description::{describe, Reason};
pub use score::{
    additives_bonus, additives_bonus_for_count, clamp_score, compute_rating, eco_penalty,
    nova_bonus, nutri_points, rating_details, RatingInputs, RatingOutcome,
};
