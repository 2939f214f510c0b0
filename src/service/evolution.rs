//! Evolution chain walking.

use lumidex_api::model::evolution::ChainLink;

use crate::{
    error::{dex::DexError, Error},
    model::evolution::EvolutionStage,
};

/// Walks evolution chains into ordered stage lists.
pub struct EvolutionService<'a> {
    api: &'a lumidex_api::Client,
}

impl<'a> EvolutionService<'a> {
    /// Creates a new instance of [`EvolutionService`]
    pub fn new(api: &'a lumidex_api::Client) -> Self {
        Self { api }
    }

    /// Fetches an evolution chain document and flattens it to ordered stages.
    ///
    /// The walk starts at the root species and always descends into the first
    /// recorded branch, so siblings of branching chains are not represented.
    /// The returned list is never empty since every chain has a root. Each
    /// stage's requirements come from the first recorded evolution detail; the
    /// root stage has none.
    pub async fn get_chain(&self, url: &str) -> Result<Vec<EvolutionStage>, Error> {
        tracing::debug!(url, "fetching evolution chain");

        let document = self.api.evolution().get_by_url(url).await?;

        let mut stages = Vec::new();
        let mut link: Option<&ChainLink> = Some(&document.chain);
        while let Some(current) = link {
            stages.push(stage_from_link(current)?);
            link = current.evolves_to.first();
        }

        Ok(stages)
    }
}

/// Reduces one chain link to its stage entry.
fn stage_from_link(link: &ChainLink) -> Result<EvolutionStage, Error> {
    let id = species_id_from_url(&link.species.url).ok_or_else(|| DexError::MissingData {
        resource: link.species.url.clone(),
        field: "numeric species id segment",
    })?;

    let detail = link.evolution_details.first();

    Ok(EvolutionStage {
        id,
        name: link.species.name.clone(),
        min_level: detail.and_then(|detail| detail.min_level),
        trigger: detail
            .and_then(|detail| detail.trigger.as_ref())
            .map(|trigger| trigger.name.clone()),
        item: detail
            .and_then(|detail| detail.item.as_ref())
            .map(|item| item.name.clone()),
    })
}

/// Extracts the numeric id from a species URL.
///
/// Species URLs end in `/pokemon-species/{id}/`, so the id is the
/// second-to-last slash-delimited segment.
fn species_id_from_url(url: &str) -> Option<u32> {
    url.rsplit('/').nth(1)?.parse().ok()
}
