//! Mock endpoint creation for PokeAPI documents.
//!
//! This module provides methods for creating mock HTTP endpoints that simulate
//! PokeAPI responses. Endpoints are registered with the context's mockito
//! server and verify they were called the expected number of times.

use lumidex_api::model::{
    evolution::EvolutionChain, pokemon::Pokemon, resource::ResourcePage, species::Species,
    ty::Type,
};
use mockito::{Matcher, Mock};

use crate::fixtures::dex::DexFixtures;

impl<'a> DexFixtures<'a> {
    /// Create a mock endpoint for one page of the creature index.
    ///
    /// Sets up a mock GET endpoint at `/pokemon` matching the exact `offset`
    /// and `limit` query values and returning the given page as JSON.
    ///
    /// # Arguments
    /// - `offset` - Expected offset query value
    /// - `limit` - Expected limit query value
    /// - `mock_page` - Page document to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint for assertion
    pub fn create_pokemon_list_endpoint(
        &mut self,
        offset: u32,
        limit: u32,
        mock_page: ResourcePage,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), offset.to_string()),
                Matcher::UrlEncoded("limit".into(), limit.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_page).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a creature document.
    ///
    /// Sets up a mock GET endpoint at `/pokemon/{pokemon_id}/` returning the
    /// given creature document as JSON.
    ///
    /// # Arguments
    /// - `pokemon_id` - The creature id for the endpoint path
    /// - `mock_pokemon` - Creature document to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint for assertion
    pub fn create_pokemon_endpoint(
        &mut self,
        pokemon_id: u32,
        mock_pokemon: Pokemon,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}/", pokemon_id);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_pokemon).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a type document.
    ///
    /// Sets up a mock GET endpoint at `/type/{type_name}/` returning the given
    /// type document as JSON.
    ///
    /// # Arguments
    /// - `type_name` - The type name for the endpoint path
    /// - `mock_type` - Type document to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint for assertion
    pub fn create_type_endpoint(
        &mut self,
        type_name: &str,
        mock_type: Type,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/type/{}/", type_name);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_type).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a species document.
    ///
    /// Sets up a mock GET endpoint at `/pokemon-species/{species_id}/`
    /// returning the given species document as JSON.
    ///
    /// # Arguments
    /// - `species_id` - The species id for the endpoint path
    /// - `mock_species` - Species document to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint for assertion
    pub fn create_species_endpoint(
        &mut self,
        species_id: u32,
        mock_species: Species,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon-species/{}/", species_id);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_species).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for an evolution chain document.
    ///
    /// Sets up a mock GET endpoint at `/evolution-chain/{chain_id}/` returning
    /// the given chain document as JSON.
    ///
    /// # Arguments
    /// - `chain_id` - The chain id for the endpoint path
    /// - `mock_chain` - Evolution chain document to return from the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint for assertion
    pub fn create_evolution_chain_endpoint(
        &mut self,
        chain_id: u32,
        mock_chain: EvolutionChain,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/evolution-chain/{}/", chain_id);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_chain).unwrap())
            .expect(expected_requests)
            .create()
    }
}
