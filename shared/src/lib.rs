//! Shared types, models and the rating engine for the iScan platform
//!
//! This crate contains everything that does not touch the network: the
//! product models, the pure rating engine, and validation helpers. It is
//! shared between the backend and the browser (via WASM).

pub mod models;
pub mod rating;
pub mod types;
pub mod validation;

pub use models::*;
pub use rating::*;
pub use types::*;
pub use validation::*;
