//! Type documents from `/type/{name}/`, describing the damage chart.

use serde::{Deserialize, Serialize};

use crate::model::resource::NamedResource;

/// A type document; only the damage relations are declared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Type {
    /// Type name, lowercase.
    pub name: String,
    /// How this type relates to other types on the damage chart.
    pub damage_relations: DamageRelations,
}

/// Damage chart relations for one type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DamageRelations {
    /// Types whose moves deal double damage to this type.
    pub double_damage_from: Vec<NamedResource>,
}
