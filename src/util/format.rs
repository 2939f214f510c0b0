//! Catalog identifier display formatting.

/// Formats a creature id for catalog display.
///
/// Pads with leading zeros to at least three digits, the classic Pokédex
/// number style. Ids of four or more digits are rendered unchanged, never
/// truncated.
///
/// # Arguments
/// - `id` - Canonical numeric identifier
///
/// # Returns
/// The zero-padded decimal string.
///
/// # Example
/// ```
/// use lumidex::util::format::format_pokedex_id;
///
/// assert_eq!(format_pokedex_id(1), "001");
/// assert_eq!(format_pokedex_id(1000), "1000");
/// ```
pub fn format_pokedex_id(id: u32) -> String {
    format!("{:03}", id)
}
