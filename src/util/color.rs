//! Type display colors.
//!
//! The color table is the palette the catalog UI was designed around, keyed by
//! upstream type name. Lookup is pure; unknown names fall back to a neutral
//! gray so new upstream types degrade gracefully.

/// Fallback color for type names not in the table.
pub const DEFAULT_TYPE_COLOR: &str = "#777777";

/// Display colors for the eighteen known types.
const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#EE99AC"),
];

/// Returns the display color for a type name.
///
/// # Arguments
/// - `type_name` - Type name; matched case-insensitively
///
/// # Returns
/// The `#RRGGBB` hex color, or [`DEFAULT_TYPE_COLOR`] for unknown names.
pub fn type_color(type_name: &str) -> &'static str {
    let type_name = type_name.to_lowercase();

    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}

/// Returns a lightened variant of a type's display color for backgrounds.
///
/// Each RGB channel moves 40% of its remaining distance toward white, so
/// darker colors lighten more in absolute terms. Output hex digits are
/// lowercase.
///
/// # Arguments
/// - `type_name` - Type name; matched case-insensitively
///
/// # Returns
/// The lightened `#rrggbb` hex color.
pub fn light_type_color(type_name: &str) -> String {
    let color = type_color(type_name);

    match hex_channels(color) {
        Some([red, green, blue]) => format!(
            "#{:02x}{:02x}{:02x}",
            lighten(red),
            lighten(green),
            lighten(blue)
        ),
        None => color.to_string(),
    }
}

/// Moves one channel 40% of its remaining distance toward white.
fn lighten(channel: u8) -> u8 {
    channel + ((255 - u16::from(channel)) * 2 / 5) as u8
}

/// Splits a `#RRGGBB` color into its channels.
fn hex_channels(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let channel = |slice: &str| u8::from_str_radix(slice, 16).ok();

    Some([
        channel(&hex[0..2])?,
        channel(&hex[2..4])?,
        channel(&hex[4..6])?,
    ])
}
