//! Resource summaries and paginated index documents.

use serde::{Deserialize, Serialize};

/// A `{name, url}` summary pair pointing at a full resource document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, lowercase as served upstream.
    pub name: String,
    /// URL of the full document.
    pub url: String,
}

/// An un-named reference to a resource, such as a species' evolution chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceRef {
    /// URL of the full document.
    pub url: String,
}

/// One page of a paginated resource index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Total number of resources in the index.
    pub count: u32,
    /// URL of the next page, absent on the final page.
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page.
    pub previous: Option<String>,
    /// Summaries for this page's resources, in index order.
    pub results: Vec<NamedResource>,
}
