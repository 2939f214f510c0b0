//! Wire models for the PokeAPI documents lumidex consumes.
//!
//! Only the fields the aggregation layer reads are declared; serde ignores the
//! rest of each upstream document.

pub mod evolution;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod ty;
