//! Aggregation layer for a PokeAPI-backed creature catalog.
//!
//! This crate turns the raw, nested documents served by PokeAPI into flat
//! entities ready for a catalog UI: paginated catalog entries, full creature
//! detail with computed weaknesses, localized species metadata, and linear
//! evolution chains. Fetching is delegated to [`lumidex_api::Client`]; this
//! layer owns composition, reduction, and the error taxonomy around them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;
pub mod service;
pub mod util;

pub use error::Error;
