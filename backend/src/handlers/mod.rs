//! HTTP handlers for the iScan API

pub mod health;
pub mod products;

pub use health::*;
pub use products::*;
