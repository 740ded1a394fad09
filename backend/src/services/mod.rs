//! Business logic services for the iScan API

pub mod product;

pub use product::ProductService;
