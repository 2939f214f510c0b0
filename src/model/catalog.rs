//! Catalog list entries and pages.

use serde::{Deserialize, Serialize};

/// One creature in the browsable catalog.
///
/// Fully resolved at construction; `id` is always the upstream canonical
/// identifier regardless of the entry's position in a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical numeric identifier.
    pub id: u32,
    /// Creature name, lowercase as served upstream.
    pub name: String,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Official artwork URL.
    pub image_url: String,
}

impl CatalogEntry {
    /// Returns true when this entry matches a catalog search term.
    ///
    /// A term matches when it is a case-insensitive substring of the name or a
    /// substring of the decimal identifier. The empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.name.to_lowercase().contains(&term) || self.id.to_string().contains(&term)
    }
}

/// One page of catalog entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Entries in upstream index order.
    pub entries: Vec<CatalogEntry>,
    /// Total number of creatures in the upstream index.
    pub total: u32,
    /// Whether another page exists after this one.
    pub has_next: bool,
}

/// Sort orders for accumulated catalog entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending canonical identifier.
    Id,
    /// Lexicographic name.
    Name,
}

/// Sorts entries in place by the given key.
pub fn sort_entries(entries: &mut [CatalogEntry], key: SortKey) {
    match key {
        SortKey::Id => entries.sort_by_key(|entry| entry.id),
        SortKey::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}
