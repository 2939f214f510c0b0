//! Pure display and text utilities.
//!
//! These functions perform no I/O; they format identifiers, look up type
//! display colors, and normalize upstream text for the catalog UI.

pub mod color;
pub mod format;
pub mod text;
