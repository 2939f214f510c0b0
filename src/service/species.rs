//! Species metadata assembly.

use crate::{error::Error, model::species::SpeciesInfo, util::text::normalize_flavor_text};

/// Language code selected from localized upstream entry lists.
const ENGLISH: &str = "en";

/// Assembles species metadata for a creature.
pub struct SpeciesService<'a> {
    api: &'a lumidex_api::Client,
}

impl<'a> SpeciesService<'a> {
    /// Creates a new instance of [`SpeciesService`]
    pub fn new(api: &'a lumidex_api::Client) -> Self {
        Self { api }
    }

    /// Fetches a species document and reduces it to display metadata.
    ///
    /// Genus and flavor text come from the first English entry of their lists;
    /// a species without English entries yields empty strings rather than an
    /// error. Flavor text is whitespace-normalized for single-line display.
    pub async fn get_species(&self, url: &str) -> Result<SpeciesInfo, Error> {
        tracing::debug!(url, "fetching species");

        let species = self.api.species().get_by_url(url).await?;

        let genus = species
            .genera
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| entry.genus.clone())
            .unwrap_or_default();

        let flavor_text = species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| normalize_flavor_text(&entry.flavor_text))
            .unwrap_or_default();

        Ok(SpeciesInfo {
            genus,
            flavor_text,
            habitat: species.habitat.map(|habitat| habitat.name),
            is_legendary: species.is_legendary,
            is_mythical: species.is_mythical,
            evolution_chain_url: species.evolution_chain.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use lumidex_test_utils::prelude::*;

    use super::*;

    mod get_species {
        use lumidex_api::model::species::Genus;

        use super::*;

        /// Expect Ok with the first English genus and flavor entries selected
        #[tokio::test]
        async fn selects_first_english_entries() -> Result<(), TestError> {
            let mut test = TestContext::new().await?;
            let api_url = test.api_url();

            let mut species = factory::species(&api_url, 1);
            species.genera.push(Genus {
                genus: "Second Seed Pokémon".to_string(),
                language: factory::language(&api_url, "en"),
            });
            let species_endpoint = test.dex().create_species_endpoint(1, species, 1);

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/1/", api_url))
                .await;

            assert!(result.is_ok());
            let info = result.unwrap();
            assert_eq!(info.genus, "Seed Pokémon");
            assert_eq!(info.habitat.as_deref(), Some("grassland"));
            species_endpoint.assert();

            Ok(())
        }

        /// Expect Ok with empty strings when no English entries exist
        #[tokio::test]
        async fn yields_empty_strings_without_english_entries() -> Result<(), TestError> {
            let mut test = TestContext::new().await?;
            let api_url = test.api_url();

            let mut species = factory::species(&api_url, 1);
            species.genera.retain(|entry| entry.language.name != "en");
            species
                .flavor_text_entries
                .retain(|entry| entry.language.name != "en");
            let species_endpoint = test.dex().create_species_endpoint(1, species, 1);

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/1/", api_url))
                .await;

            assert!(result.is_ok());
            let info = result.unwrap();
            assert_eq!(info.genus, "");
            assert_eq!(info.flavor_text, "");
            species_endpoint.assert();

            Ok(())
        }

        /// Expect Ok with soft line breaks normalized to single spaces
        #[tokio::test]
        async fn normalizes_flavor_text() -> Result<(), TestError> {
            let mut test = TestContext::new().await?;
            let api_url = test.api_url();

            let species_endpoint =
                test.dex()
                    .create_species_endpoint(1, factory::species(&api_url, 1), 1);

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/1/", api_url))
                .await;

            assert!(result.is_ok());
            let info = result.unwrap();
            assert_eq!(
                info.flavor_text,
                "A strange seed was planted on its back at birth."
            );
            species_endpoint.assert();

            Ok(())
        }

        /// Expect Ok with no habitat when the species has none recorded
        #[tokio::test]
        async fn maps_missing_habitat() -> Result<(), TestError> {
            let mut test = TestContext::new().await?;
            let api_url = test.api_url();

            let mut species = factory::species(&api_url, 150);
            species.habitat = None;
            species.is_legendary = true;
            let species_endpoint = test.dex().create_species_endpoint(150, species, 1);

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/150/", api_url))
                .await;

            assert!(result.is_ok());
            let info = result.unwrap();
            assert_eq!(info.habitat, None);
            assert!(info.is_legendary);
            assert!(!info.is_mythical);
            species_endpoint.assert();

            Ok(())
        }

        /// Expect Ok carrying the evolution chain reference for the next hop
        #[tokio::test]
        async fn carries_evolution_chain_reference() -> Result<(), TestError> {
            let mut test = TestContext::new().await?;
            let api_url = test.api_url();

            let species_endpoint =
                test.dex()
                    .create_species_endpoint(1, factory::species(&api_url, 1), 1);

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/1/", api_url))
                .await;

            assert!(result.is_ok());
            assert_eq!(
                result.unwrap().evolution_chain_url,
                format!("{}/evolution-chain/1/", api_url)
            );
            species_endpoint.assert();

            Ok(())
        }

        /// Expect Error when the species fetch fails
        #[tokio::test]
        async fn fails_when_fetch_fails() -> Result<(), TestError> {
            let test = TestContext::new().await?;
            let api_url = test.api_url();

            let species_service = SpeciesService::new(&test.client);
            let result = species_service
                .get_species(&format!("{}/pokemon-species/1/", api_url))
                .await;

            assert!(matches!(result, Err(Error::ApiError(_))));

            Ok(())
        }
    }
}
