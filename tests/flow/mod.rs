//! End-to-end browsing flows across the aggregation services.
//!
//! These tests run the services against a single mock PokeAPI server the way
//! a client application would: resolve a catalog page, open one creature's
//! detail view, read its species entry, and walk the evolution chain the
//! species references. Each service consumes URLs surfaced by the previous
//! one, so the tests also verify that references stay consistent end to end.

use lumidex::model::catalog::{sort_entries, SortKey};
use lumidex::service::{
    catalog::CatalogService, detail::DetailService, evolution::EvolutionService,
    species::SpeciesService,
};
use lumidex::util::format::format_pokedex_id;
use lumidex_test_utils::prelude::*;

/// Tests the full browse path from catalog page to evolution chain.
///
/// Verifies that each aggregation step consumes the references produced by
/// the previous one: the catalog entry carries the id for the detail view,
/// the detail carries the species reference, and the species carries the
/// evolution chain reference.
///
/// Expected: Ok at every step with consistent data
#[tokio::test]
async fn browses_from_catalog_page_to_evolution_chain() -> Result<(), TestError> {
    let mut context = TestContext::new().await?;
    let api_url = context.api_url();

    let mock_page = factory::resource_page(
        151,
        Some(format!("{}/pokemon?offset=1&limit=1", api_url)),
        vec![factory::pokemon_summary(&api_url, 1, "bulbasaur")],
    );

    let list_endpoint = context.dex().create_pokemon_list_endpoint(0, 1, mock_page, 1);
    // Resolved once while building the catalog entry and once for the detail view.
    let pokemon_endpoint = context.dex().create_pokemon_endpoint(
        1,
        factory::pokemon(&api_url, 1, "bulbasaur", &["grass", "poison"]),
        2,
    );
    let grass_endpoint = context.dex().create_type_endpoint(
        "grass",
        factory::type_with_weaknesses(&api_url, "grass", &["fire", "ice", "poison", "flying", "bug"]),
        1,
    );
    let poison_endpoint = context.dex().create_type_endpoint(
        "poison",
        factory::type_with_weaknesses(&api_url, "poison", &["ground", "psychic"]),
        1,
    );
    let species_endpoint = context
        .dex()
        .create_species_endpoint(1, factory::species(&api_url, 1), 1);
    let chain_endpoint = context.dex().create_evolution_chain_endpoint(
        1,
        factory::evolution_chain(
            &api_url,
            &[(1, "bulbasaur", None), (2, "ivysaur", Some(16)), (3, "venusaur", Some(32))],
        ),
        1,
    );

    let catalog_service = CatalogService::new(&context.client);
    let result = catalog_service.list_page(0, 1).await;

    assert!(result.is_ok());
    let page = result.unwrap();
    assert_eq!(page.total, 151);
    assert!(page.has_next);
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].id, 1);
    assert_eq!(page.entries[0].name, "bulbasaur");
    assert_eq!(page.entries[0].types, ["grass", "poison"]);
    assert_eq!(format_pokedex_id(page.entries[0].id), "001");

    let detail_service = DetailService::new(&context.client);
    let result = detail_service.get_detail(page.entries[0].id).await;

    assert!(result.is_ok());
    let detail = result.unwrap();
    assert_eq!(detail.height, 0.7);
    assert_eq!(detail.weight, 6.9);
    let weaknesses: Vec<&str> = detail.weaknesses.iter().map(String::as_str).collect();
    assert_eq!(
        weaknesses,
        ["bug", "fire", "flying", "ground", "ice", "poison", "psychic"]
    );

    let species_service = SpeciesService::new(&context.client);
    let result = species_service.get_species(&detail.species_url).await;

    assert!(result.is_ok());
    let species = result.unwrap();
    assert_eq!(species.genus, "Seed Pokémon");
    assert_eq!(
        species.flavor_text,
        "A strange seed was planted on its back at birth."
    );
    assert_eq!(species.habitat.as_deref(), Some("grassland"));

    let evolution_service = EvolutionService::new(&context.client);
    let result = evolution_service.get_chain(&species.evolution_chain_url).await;

    assert!(result.is_ok());
    let stages = result.unwrap();
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].id, 1);
    assert_eq!(stages[0].name, "bulbasaur");
    assert!(stages[0].min_level.is_none());
    assert!(stages[0].trigger.is_none());
    assert_eq!(stages[1].id, 2);
    assert_eq!(stages[1].name, "ivysaur");
    assert_eq!(stages[1].min_level, Some(16));
    assert_eq!(stages[1].trigger.as_deref(), Some("level-up"));
    assert_eq!(stages[2].id, 3);
    assert_eq!(stages[2].name, "venusaur");
    assert_eq!(stages[2].min_level, Some(32));

    list_endpoint.assert();
    pokemon_endpoint.assert();
    grass_endpoint.assert();
    poison_endpoint.assert();
    species_endpoint.assert();
    chain_endpoint.assert();

    Ok(())
}

/// Tests the final catalog page holding fewer entries than the limit.
///
/// Verifies that a page request near the end of the index resolves only the
/// entries that exist and reports that no further page follows.
///
/// Expected: Ok with the short page and no next page
#[tokio::test]
async fn resolves_short_final_page() -> Result<(), TestError> {
    let mut context = TestContext::new().await?;
    let api_url = context.api_url();

    let mock_page = factory::resource_page(
        151,
        None,
        vec![factory::pokemon_summary(&api_url, 151, "mew")],
    );

    let list_endpoint = context.dex().create_pokemon_list_endpoint(150, 20, mock_page, 1);
    let mew_endpoint = context.dex().create_pokemon_endpoint(
        151,
        factory::pokemon(&api_url, 151, "mew", &["psychic"]),
        1,
    );

    let catalog_service = CatalogService::new(&context.client);
    let result = catalog_service.list_page(150, 20).await;

    assert!(result.is_ok());
    let page = result.unwrap();
    assert_eq!(page.entries.len(), 1);
    assert_eq!(page.entries[0].id, 151);
    assert_eq!(page.total, 151);
    assert!(!page.has_next);

    list_endpoint.assert();
    mew_endpoint.assert();

    Ok(())
}

/// Tests client-side search and sorting over a resolved catalog page.
///
/// Verifies that a page arrives in upstream index order and that the sort
/// and search helpers rearrange and filter the resolved entries without
/// further requests.
///
/// Expected: Ok with entries sorted and filtered as requested
#[tokio::test]
async fn filters_and_sorts_a_resolved_page() -> Result<(), TestError> {
    let mut context = TestContext::new().await?;
    let api_url = context.api_url();

    let mock_page = factory::resource_page(
        151,
        Some(format!("{}/pokemon?offset=3&limit=3", api_url)),
        vec![
            factory::pokemon_summary(&api_url, 35, "clefairy"),
            factory::pokemon_summary(&api_url, 6, "charizard"),
            factory::pokemon_summary(&api_url, 1, "bulbasaur"),
        ],
    );

    let list_endpoint = context.dex().create_pokemon_list_endpoint(0, 3, mock_page, 1);
    let clefairy_endpoint = context.dex().create_pokemon_endpoint(
        35,
        factory::pokemon(&api_url, 35, "clefairy", &["fairy"]),
        1,
    );
    let charizard_endpoint = context.dex().create_pokemon_endpoint(
        6,
        factory::pokemon(&api_url, 6, "charizard", &["fire", "flying"]),
        1,
    );
    let bulbasaur_endpoint = context.dex().create_pokemon_endpoint(
        1,
        factory::pokemon(&api_url, 1, "bulbasaur", &["grass", "poison"]),
        1,
    );

    let catalog_service = CatalogService::new(&context.client);
    let result = catalog_service.list_page(0, 3).await;

    assert!(result.is_ok());
    let page = result.unwrap();

    // Index order is preserved, not id order.
    let names: Vec<&str> = page.entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["clefairy", "charizard", "bulbasaur"]);

    let mut entries = page.entries;
    sort_entries(&mut entries, SortKey::Name);
    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["bulbasaur", "charizard", "clefairy"]);

    sort_entries(&mut entries, SortKey::Id);
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![1, 6, 35]);

    let matching: Vec<&str> = entries
        .iter()
        .filter(|entry| entry.matches("char"))
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(matching, ["charizard"]);

    list_endpoint.assert();
    clefairy_endpoint.assert();
    charizard_endpoint.assert();
    bulbasaur_endpoint.assert();

    Ok(())
}
