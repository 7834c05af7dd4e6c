//! Seeded sample-data generation for a retail coffee chain.
//!
//! This crate produces four internally consistent tables (customer
//! demographics, stores, purchase history, loyalty membership) from one
//! seeded random stream and exports each table as CSV.

pub mod domains;
pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod sampling;

pub use engine::{DatasetGenerator, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{
    Customer, GenerateOptions, GenerationReport, LoyaltyRecord, Store, TableReport, Transaction,
};
