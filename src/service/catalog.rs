//! Paginated catalog assembly.

use futures::future::join_all;
use lumidex_api::model::pokemon::Pokemon;

use crate::{
    error::{dex::DexError, Error},
    model::catalog::{CatalogEntry, CatalogPage},
};

/// Maximum number of detail fetches in flight at once while filling a page.
const MAX_CONCURRENT_DETAIL_FETCHES: usize = 10;

/// Assembles the browsable creature catalog.
pub struct CatalogService<'a> {
    api: &'a lumidex_api::Client,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(api: &'a lumidex_api::Client) -> Self {
        Self { api }
    }

    /// Fetches one page of the catalog with every entry fully resolved.
    ///
    /// Fetches the index page for `offset`/`limit`, then resolves each summary
    /// to its full document concurrently in batches. Entries come back in
    /// index order regardless of fetch completion order, and any failed
    /// sub-fetch fails the whole page. The final page may hold fewer than
    /// `limit` entries; `limit` itself is passed upstream unvalidated.
    pub async fn list_page(&self, offset: u32, limit: u32) -> Result<CatalogPage, Error> {
        tracing::debug!(offset, limit, "fetching catalog page");

        let page = self.api.pokemon().list(offset, limit).await?;

        let mut entries = Vec::with_capacity(page.results.len());
        for batch in page.results.chunks(MAX_CONCURRENT_DETAIL_FETCHES) {
            let futures: Vec<_> = batch
                .iter()
                .map(|summary| async move {
                    let pokemon = self.api.pokemon().get_by_url(&summary.url).await?;

                    catalog_entry(pokemon)
                })
                .collect();

            let results = join_all(futures).await;
            for result in results {
                entries.push(result?);
            }
        }

        Ok(CatalogPage {
            entries,
            total: page.count,
            has_next: page.next.is_some(),
        })
    }
}

/// Reduces a full creature document to its catalog entry.
fn catalog_entry(pokemon: Pokemon) -> Result<CatalogEntry, Error> {
    let image_url = pokemon
        .official_artwork()
        .ok_or_else(|| DexError::MissingData {
            resource: format!("pokemon/{}", pokemon.id),
            field: "official artwork",
        })?
        .to_string();

    Ok(CatalogEntry {
        id: pokemon.id,
        name: pokemon.name,
        types: pokemon
            .types
            .into_iter()
            .map(|slot| slot.ty.name)
            .collect(),
        image_url,
    })
}
