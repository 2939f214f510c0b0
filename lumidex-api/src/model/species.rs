//! Species documents from `/pokemon-species/{id}/`.

use serde::{Deserialize, Serialize};

use crate::model::resource::{NamedResource, ResourceRef};

/// A species document carrying localized metadata for a creature.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Species {
    /// Genus lines per language.
    pub genera: Vec<Genus>,
    /// Flavor text entries per language and game version.
    pub flavor_text_entries: Vec<FlavorText>,
    /// Habitat reference, absent for species without a recorded habitat.
    pub habitat: Option<NamedResource>,
    /// Whether the species is legendary.
    pub is_legendary: bool,
    /// Whether the species is mythical.
    pub is_mythical: bool,
    /// Reference to the evolution chain this species belongs to.
    pub evolution_chain: ResourceRef,
}

/// A genus line in one language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genus {
    /// The genus text, e.g. `Seed Pokémon`.
    pub genus: String,
    /// Language of this entry.
    pub language: NamedResource,
}

/// A flavor text entry in one language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorText {
    /// Raw flavor text, containing upstream soft line breaks.
    pub flavor_text: String,
    /// Language of this entry.
    pub language: NamedResource,
}
