//! Error types for PokeAPI requests.

use thiserror::Error;

/// Errors surfaced by [`Client`](crate::Client) operations.
///
/// Every request failure carries the URL it was issued against, so callers
/// aggregating several fetches can report exactly which sub-resource failed.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP client construction failed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
    /// The request never produced a response (DNS, connect, or transport failure).
    #[error("GET {url} failed")]
    Network {
        /// URL the request was issued against.
        url: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// Upstream answered with a non-success status code.
    #[error("GET {url} returned HTTP {status}")]
    Http {
        /// Status code of the response.
        status: u16,
        /// URL the request was issued against.
        url: String,
    },
    /// The response body was not valid JSON for the expected document shape.
    #[error("failed to decode response from {url}")]
    Decode {
        /// URL the request was issued against.
        url: String,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },
}
