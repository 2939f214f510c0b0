//! Error types for the aggregation layer.
//!
//! A single aggregate [`Error`] wraps the client crate's request errors and
//! the domain errors raised while reducing upstream documents, so every
//! service method surfaces one type through `?`.

pub mod dex;

use thiserror::Error;

use crate::error::dex::DexError;

/// Main error type for aggregation operations.
///
/// The first failing sub-fetch of an aggregate operation aborts the whole
/// operation and surfaces here unchanged; request errors carry the URL of the
/// sub-resource that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Request-level failure from the PokeAPI client (transport, HTTP status,
    /// or decode).
    #[error(transparent)]
    ApiError(#[from] lumidex_api::Error),
    /// Domain failure while reducing fetched documents.
    #[error(transparent)]
    DexError(#[from] DexError),
}
