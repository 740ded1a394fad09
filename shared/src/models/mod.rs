//! Domain models for the iScan platform

mod analysis;
mod grade;
mod product;

pub use analysis::*;
pub use grade::*;
pub use product::*;
