//! Flavor text cleanup.

/// Normalizes upstream flavor text for single-line display.
///
/// Flavor text arrives with form feeds and newlines as soft line breaks, and
/// occasionally with literal `\f` or `\n` escape sequences left in the data.
/// All of them become single spaces and runs of whitespace collapse, so the
/// result contains no control characters.
///
/// # Arguments
/// - `text` - Raw flavor text from a species document
///
/// # Returns
/// The normalized single-line string.
pub fn normalize_flavor_text(text: &str) -> String {
    let unescaped = text.replace("\\f", " ").replace("\\n", " ");

    unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
}
