//! Full creature detail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Full detail for one creature, flattened for a detail view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatureDetail {
    /// Canonical numeric identifier.
    pub id: u32,
    /// Creature name, lowercase as served upstream.
    pub name: String,
    /// Height in metres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Base stats in upstream order.
    pub stats: Vec<StatValue>,
    /// Abilities in upstream order.
    pub abilities: Vec<Ability>,
    /// Official artwork URL.
    pub image_url: String,
    /// Names of types this creature takes double damage from, deduplicated.
    pub weaknesses: BTreeSet<String>,
    /// Unresolved reference to this creature's species document.
    pub species_url: String,
}

/// A single named base stat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    /// Stat name as served upstream, e.g. `hp` or `special-attack`.
    pub name: String,
    /// Base value, 0 to 255.
    pub value: u32,
}

/// An ability and whether it is hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Ability name.
    pub name: String,
    /// Whether the ability is a hidden ability.
    pub is_hidden: bool,
}
