//! Aggregation services composing PokeAPI fetches into catalog entities.
//!
//! Each service borrows a configured [`lumidex_api::Client`] and exposes one
//! aggregate operation. Sub-fetches within an operation run concurrently where
//! the data allows it; any failed sub-fetch aborts the whole operation, so
//! callers never observe partial results.

pub mod catalog;
pub mod detail;
pub mod evolution;
pub mod species;
