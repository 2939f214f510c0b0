//! Typed client for the PokeAPI REST endpoints consumed by lumidex.
//!
//! This crate wraps the handful of PokeAPI resources the aggregation layer reads
//! (creatures, types, species, evolution chains) behind a small typed client.
//! Requests are plain GET-and-decode with no retries, caching, or rate limiting;
//! every failure is reported per request and annotated with the URL that failed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::Error;
