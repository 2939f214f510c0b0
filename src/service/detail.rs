//! Creature detail assembly.

use std::collections::BTreeSet;

use futures::future::join_all;

use crate::{
    error::{dex::DexError, Error},
    model::detail::{Ability, CreatureDetail, StatValue},
};

/// Assembles full creature detail, including computed type weaknesses.
pub struct DetailService<'a> {
    api: &'a lumidex_api::Client,
}

impl<'a> DetailService<'a> {
    /// Creates a new instance of [`DetailService`]
    pub fn new(api: &'a lumidex_api::Client) -> Self {
        Self { api }
    }

    /// Fetches one creature and resolves its full detail.
    ///
    /// The creature document is fetched first; on its failure nothing else
    /// runs. Its type slots are then resolved concurrently and the weakness
    /// set computed as the union of every type's double-damage-from relations,
    /// deduplicated. Height and weight convert from upstream decimetres and
    /// hectograms to metres and kilograms. The species reference is carried
    /// unresolved for callers that need species metadata later.
    pub async fn get_detail(&self, pokemon_id: u32) -> Result<CreatureDetail, Error> {
        tracing::debug!(pokemon_id, "fetching creature detail");

        let pokemon = self.api.pokemon().get(pokemon_id).await?;

        let type_urls: Vec<String> = pokemon
            .types
            .iter()
            .map(|slot| slot.ty.url.clone())
            .collect();
        let futures: Vec<_> = type_urls
            .iter()
            .map(|url| async move { self.api.types().get_by_url(url).await })
            .collect();

        let mut weaknesses = BTreeSet::new();
        for result in join_all(futures).await {
            let ty = result?;
            for attacker in ty.damage_relations.double_damage_from {
                weaknesses.insert(attacker.name);
            }
        }

        let image_url = pokemon
            .official_artwork()
            .ok_or_else(|| DexError::MissingData {
                resource: format!("pokemon/{}", pokemon.id),
                field: "official artwork",
            })?
            .to_string();

        Ok(CreatureDetail {
            id: pokemon.id,
            name: pokemon.name,
            height: f64::from(pokemon.height) / 10.0,
            weight: f64::from(pokemon.weight) / 10.0,
            types: pokemon
                .types
                .into_iter()
                .map(|slot| slot.ty.name)
                .collect(),
            stats: pokemon
                .stats
                .into_iter()
                .map(|slot| StatValue {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
            abilities: pokemon
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    is_hidden: slot.is_hidden,
                })
                .collect(),
            image_url,
            weaknesses,
            species_url: pokemon.species.url,
        })
    }
}
