//! Catalog-facing view models produced by the aggregation services.

pub mod catalog;
pub mod detail;
pub mod evolution;
pub mod species;
