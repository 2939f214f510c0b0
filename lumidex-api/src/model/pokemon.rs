//! Creature documents from `/pokemon/{id}/`.

use serde::{Deserialize, Serialize};

use crate::model::resource::NamedResource;

/// A single creature document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    /// Canonical numeric identifier.
    pub id: u32,
    /// Creature name, lowercase.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Types in slot order.
    pub types: Vec<TypeSlot>,
    /// Base stat values in upstream order.
    pub stats: Vec<StatSlot>,
    /// Abilities, including hidden ones.
    pub abilities: Vec<AbilitySlot>,
    /// Sprite and artwork URLs.
    pub sprites: Sprites,
    /// Summary reference to this creature's species document.
    pub species: NamedResource,
}

impl Pokemon {
    /// Returns the official artwork URL, when the upstream document carries one.
    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }
}

/// A type occupying one of a creature's type slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Which slot this type occupies, 1-based.
    pub slot: u8,
    /// Summary reference to the type document.
    #[serde(rename = "type")]
    pub ty: NamedResource,
}

/// A single base stat value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatSlot {
    /// Base value of the stat.
    pub base_stat: u32,
    /// Summary reference naming the stat.
    pub stat: NamedResource,
}

/// An ability held by a creature.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// Whether the ability is a hidden ability.
    pub is_hidden: bool,
    /// Summary reference naming the ability.
    pub ability: NamedResource,
}

/// Sprite collection; only the official artwork subtree is declared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sprites {
    /// Alternative sprite sets.
    pub other: OtherSprites,
}

/// Alternative sprite sets beyond in-game sprites.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OtherSprites {
    /// High-resolution official artwork.
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

/// Official artwork URLs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OfficialArtwork {
    /// Default front-facing artwork URL; null for some forms.
    pub front_default: Option<String>,
}
