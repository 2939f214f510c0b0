//! Factory functions for PokeAPI wire documents with default test values.
//!
//! Documents embed resource URLs; factories take the mock server's base URL so
//! every nested reference resolves back to the mock server during tests.

use lumidex_api::model::{
    evolution::{ChainLink, EvolutionChain, EvolutionDetail},
    pokemon::{AbilitySlot, OfficialArtwork, OtherSprites, Pokemon, Sprites, StatSlot, TypeSlot},
    resource::{NamedResource, ResourcePage, ResourceRef},
    species::{FlavorText, Genus, Species},
    ty::{DamageRelations, Type},
};

/// Create a named resource summary.
///
/// # Arguments
/// - `name` - Resource name
/// - `url` - URL of the full document
///
/// # Returns
/// - `NamedResource` - A summary pair
pub fn named(name: &str, url: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: url.to_string(),
    }
}

/// Create a language summary for localized entry lists.
pub fn language(api_url: &str, code: &str) -> NamedResource {
    named(code, &format!("{}/language/{}/", api_url, code))
}

/// Create a creature index summary pointing at the mock server.
///
/// # Arguments
/// - `api_url` - Mock server base URL
/// - `pokemon_id` - Canonical identifier used in the summary URL
/// - `name` - Creature name
///
/// # Returns
/// - `NamedResource` - An index summary resolving to the mock creature endpoint
pub fn pokemon_summary(api_url: &str, pokemon_id: u32, name: &str) -> NamedResource {
    named(name, &format!("{}/pokemon/{}/", api_url, pokemon_id))
}

/// Create one page of the creature index.
///
/// # Arguments
/// - `count` - Total number of creatures in the index
/// - `next` - URL of the following page, `None` on the final page
/// - `results` - Index summaries for this page
///
/// # Returns
/// - `ResourcePage` - A page document with no previous page
pub fn resource_page(
    count: u32,
    next: Option<String>,
    results: Vec<NamedResource>,
) -> ResourcePage {
    ResourcePage {
        count,
        next,
        previous: None,
        results,
    }
}

/// Create a mock creature document with default test values.
///
/// Height and weight carry the upstream decimetre/hectogram values `7` and
/// `69`; stats, abilities, and official artwork are populated with standard
/// test data.
///
/// # Arguments
/// - `api_url` - Mock server base URL used for nested resource references
/// - `pokemon_id` - Canonical identifier
/// - `name` - Creature name
/// - `type_names` - Type names in slot order
///
/// # Returns
/// - `Pokemon` - A creature document with test data
pub fn pokemon(api_url: &str, pokemon_id: u32, name: &str, type_names: &[&str]) -> Pokemon {
    let types = type_names
        .iter()
        .enumerate()
        .map(|(index, type_name)| TypeSlot {
            slot: index as u8 + 1,
            ty: named(type_name, &format!("{}/type/{}/", api_url, type_name)),
        })
        .collect();

    Pokemon {
        id: pokemon_id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        types,
        stats: vec![
            StatSlot {
                base_stat: 45,
                stat: named("hp", &format!("{}/stat/1/", api_url)),
            },
            StatSlot {
                base_stat: 49,
                stat: named("attack", &format!("{}/stat/2/", api_url)),
            },
        ],
        abilities: vec![
            AbilitySlot {
                is_hidden: false,
                ability: named("overgrow", &format!("{}/ability/65/", api_url)),
            },
            AbilitySlot {
                is_hidden: true,
                ability: named("chlorophyll", &format!("{}/ability/34/", api_url)),
            },
        ],
        sprites: sprites(pokemon_id),
        species: named(
            name,
            &format!("{}/pokemon-species/{}/", api_url, pokemon_id),
        ),
    }
}

/// Create a sprite set carrying official artwork for the given id.
pub fn sprites(pokemon_id: u32) -> Sprites {
    Sprites {
        other: OtherSprites {
            official_artwork: OfficialArtwork {
                front_default: Some(format!(
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{}.png",
                    pokemon_id
                )),
            },
        },
    }
}

/// Create a mock species document with default test values.
///
/// English genus and flavor entries are preceded by Japanese ones to exercise
/// locale selection; the flavor text contains upstream soft line breaks.
///
/// # Arguments
/// - `api_url` - Mock server base URL used for nested resource references
/// - `chain_id` - Identifier used in the evolution chain reference URL
///
/// # Returns
/// - `Species` - A species document with test data
pub fn species(api_url: &str, chain_id: u32) -> Species {
    Species {
        genera: vec![
            Genus {
                genus: "たねポケモン".to_string(),
                language: language(api_url, "ja-Hrkt"),
            },
            Genus {
                genus: "Seed Pokémon".to_string(),
                language: language(api_url, "en"),
            },
        ],
        flavor_text_entries: vec![
            FlavorText {
                flavor_text: "ふしぎなタネ。".to_string(),
                language: language(api_url, "ja-Hrkt"),
            },
            FlavorText {
                flavor_text: "A strange seed was\nplanted on its\u{c}back at birth.".to_string(),
                language: language(api_url, "en"),
            },
        ],
        habitat: Some(named(
            "grassland",
            &format!("{}/pokemon-habitat/3/", api_url),
        )),
        is_legendary: false,
        is_mythical: false,
        evolution_chain: ResourceRef {
            url: format!("{}/evolution-chain/{}/", api_url, chain_id),
        },
    }
}

/// Create a mock type document with the given double-damage attackers.
///
/// # Arguments
/// - `api_url` - Mock server base URL used for nested resource references
/// - `name` - Type name
/// - `double_damage_from` - Names of types dealing double damage to this one
///
/// # Returns
/// - `Type` - A type document with test data
pub fn type_with_weaknesses(api_url: &str, name: &str, double_damage_from: &[&str]) -> Type {
    Type {
        name: name.to_string(),
        damage_relations: DamageRelations {
            double_damage_from: double_damage_from
                .iter()
                .map(|attacker| named(attacker, &format!("{}/type/{}/", api_url, attacker)))
                .collect(),
        },
    }
}

/// Create a linear evolution chain.
///
/// Each stage is `(species_id, name, min_level)`; stages after the first get a
/// `level-up` trigger and no item. Branching chains should be assembled from
/// [`ChainLink`] values directly.
///
/// # Arguments
/// - `api_url` - Mock server base URL used for species reference URLs
/// - `stages` - Root-first stage tuples; must not be empty
///
/// # Returns
/// - `EvolutionChain` - A chain document descending through the given stages
pub fn evolution_chain(api_url: &str, stages: &[(u32, &str, Option<u32>)]) -> EvolutionChain {
    let mut next: Option<ChainLink> = None;

    for (position, (species_id, name, min_level)) in stages.iter().enumerate().rev() {
        let evolution_details = if position == 0 {
            Vec::new()
        } else {
            vec![EvolutionDetail {
                min_level: *min_level,
                trigger: Some(named(
                    "level-up",
                    &format!("{}/evolution-trigger/1/", api_url),
                )),
                item: None,
            }]
        };

        next = Some(ChainLink {
            species: named(
                name,
                &format!("{}/pokemon-species/{}/", api_url, species_id),
            ),
            evolution_details,
            evolves_to: next.take().map(|link| vec![link]).unwrap_or_default(),
        });
    }

    EvolutionChain {
        chain: next.expect("evolution_chain requires at least one stage"),
    }
}
