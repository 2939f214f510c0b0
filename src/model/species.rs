//! Species metadata.

use serde::{Deserialize, Serialize};

/// Species-level metadata for a creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// English genus line, e.g. `Seed Pokémon`; empty when upstream carries no
    /// English entry.
    pub genus: String,
    /// English flavor text, whitespace-normalized for single-line display;
    /// empty when upstream carries no English entry.
    pub flavor_text: String,
    /// Habitat name, absent for species without a recorded habitat.
    pub habitat: Option<String>,
    /// Whether the species is legendary.
    pub is_legendary: bool,
    /// Whether the species is mythical.
    pub is_mythical: bool,
    /// URL of the evolution chain document this species belongs to.
    pub evolution_chain_url: String,
}
