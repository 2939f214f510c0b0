//! Evolution chain stages.

use serde::{Deserialize, Serialize};

/// One stage of a linear evolution chain.
///
/// The base stage of a chain carries no evolution requirements, so its
/// `min_level`, `trigger`, and `item` are all absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStage {
    /// Canonical numeric identifier of the stage's species.
    pub id: u32,
    /// Species name.
    pub name: String,
    /// Minimum level required to reach this stage, for level-based evolutions.
    pub min_level: Option<u32>,
    /// Name of the trigger causing this evolution, e.g. `level-up`.
    pub trigger: Option<String>,
    /// Name of the required item, for item-based evolutions.
    pub item: Option<String>,
}
