//! Evolution chain documents from `/evolution-chain/{id}/`.

use serde::{Deserialize, Serialize};

use crate::model::resource::NamedResource;

/// An evolution chain document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionChain {
    /// Root link of the chain, holding the base species.
    pub chain: ChainLink,
}

/// One node of an evolution chain tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainLink {
    /// Summary reference to this link's species.
    pub species: NamedResource,
    /// Requirements for evolving into this link; empty for the base species.
    pub evolution_details: Vec<EvolutionDetail>,
    /// Links this species evolves into; multiple entries for branching chains.
    pub evolves_to: Vec<ChainLink>,
}

/// One recorded way of evolving into a species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionDetail {
    /// Minimum level, for level-based evolutions.
    pub min_level: Option<u32>,
    /// Summary reference naming the trigger, e.g. `level-up` or `use-item`.
    pub trigger: Option<NamedResource>,
    /// Summary reference naming the required item, for item-based evolutions.
    pub item: Option<NamedResource>,
}
