//! Test context structure and utilities.
//!
//! This module provides the `TestContext` that service tests run against: a
//! mockito server standing in for PokeAPI and a `lumidex_api::Client`
//! configured to call it.

use mockito::{Server, ServerGuard};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Mock-backed test environment.
///
/// Each context owns its own mock server on its own port, so tests stay
/// isolated when run in parallel.
///
/// # Usage
///
/// ```ignore
/// let mut test = TestContext::new().await?;
/// let api_url = test.api_url();
///
/// // Register mock endpoints through the fixtures accessor
/// let endpoint = test
///     .dex()
///     .create_pokemon_endpoint(1, factory::pokemon(&api_url, 1, "bulbasaur", &["grass"]), 1);
///
/// // Run the code under test against test.client, then verify
/// endpoint.assert();
/// ```
pub struct TestContext {
    /// Client configured to use the mock server.
    pub client: lumidex_api::Client,
    /// Mock HTTP server standing in for PokeAPI endpoints.
    pub server: ServerGuard,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// Starts a mock server and builds a client pointed at it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server running and client configured against it
    /// - `Err(TestError::ApiError)` - Client construction failed
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let config = lumidex_api::Config::builder().api_url(&server.url()).build();

        let client = lumidex_api::Client::builder()
            .config(config)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        Ok(TestContext { client, server })
    }

    /// Base URL of the mock server.
    ///
    /// Fixture documents embed resource URLs; building them from this base
    /// keeps every nested reference pointing back at the mock server.
    pub fn api_url(&self) -> String {
        self.server.url()
    }
}
