// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PoolFilter, PoolSelection, PoolSummary, StatusFilter, TierCount};
use draft_league_domain::{Catalog, CatalogEntry, Category, Generation, PokemonType, Tier};

fn names(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

// ============================================================================
// Filter view
// ============================================================================

#[test]
fn test_empty_filter_returns_whole_catalog() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);

    let result: Vec<&CatalogEntry> = PoolFilter::default().apply(&catalog, &pool);

    assert_eq!(result.len(), catalog.len());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        search: Some(String::from("ZORO")),
        ..PoolFilter::default()
    };

    let result: Vec<&CatalogEntry> = filter.apply(&catalog, &pool);

    assert_eq!(names(&result), vec!["zoroark", "zoroark-hisui"]);
}

#[test]
fn test_empty_search_places_no_constraint() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        search: Some(String::new()),
        ..PoolFilter::default()
    };

    assert_eq!(filter.apply(&catalog, &pool).len(), catalog.len());
}

#[test]
fn test_whitespace_search_is_matched_as_typed() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let blank: PoolFilter = PoolFilter {
        search: Some(String::from(" ")),
        ..PoolFilter::default()
    };
    let padded: PoolFilter = PoolFilter {
        search: Some(String::from("mew ")),
        ..PoolFilter::default()
    };

    assert!(blank.apply(&catalog, &pool).is_empty());
    assert!(padded.apply(&catalog, &pool).is_empty());
}

#[test]
fn test_predicates_are_conjunctive() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        pokemon_type: Some(PokemonType::Steel),
        status: StatusFilter::Disabled,
        ..PoolFilter::default()
    };

    let result: Vec<&CatalogEntry> = filter.apply(&catalog, &pool);

    assert_eq!(names(&result), vec!["jirachi", "kartana"]);
}

#[test]
fn test_generation_and_category() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        generation: Some(Generation::new(7).unwrap()),
        category: Some(Category::Standard),
        ..PoolFilter::default()
    };

    let result: Vec<&CatalogEntry> = filter.apply(&catalog, &pool);

    assert_eq!(names(&result), vec!["toxapex", "ninetales-alola"]);
}

#[test]
fn test_tier_filter() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        tier: Some(Tier::new("A")),
        ..PoolFilter::default()
    };

    let result: Vec<&CatalogEntry> = filter.apply(&catalog, &pool);

    assert_eq!(result.len(), 6);
    assert!(result.iter().all(|e| e.tier == Tier::new("A")));
}

#[test]
fn test_filter_result_is_catalog_subsequence() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        search: Some(String::from("a")),
        status: StatusFilter::Enabled,
        ..PoolFilter::default()
    };

    let result: Vec<&CatalogEntry> = filter.apply(&catalog, &pool);
    let mut positions = result
        .iter()
        .map(|e| catalog.entries().iter().position(|c| c.id == e.id).unwrap());

    let mut last: usize = positions.next().unwrap();
    for position in positions {
        assert!(position > last);
        last = position;
    }
}

#[test]
fn test_unmatched_filter_is_empty() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        search: Some(String::from("pikachu")),
        ..PoolFilter::default()
    };

    assert!(filter.apply(&catalog, &pool).is_empty());
}

#[test]
fn test_filter_over_empty_catalog_is_empty() {
    let catalog: Catalog = Catalog::new(Vec::new());
    let pool: PoolSelection = PoolSelection::empty();

    assert!(PoolFilter::default().apply(&catalog, &pool).is_empty());
}

#[test]
fn test_status_filter_wire_names() {
    let status: StatusFilter = serde_json::from_str("\"disabled\"").unwrap();
    assert_eq!(status, StatusFilter::Disabled);
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn test_default_pool_summary() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);

    let summary: PoolSummary = PoolSummary::compute(&catalog, &pool, &PoolFilter::default());

    assert_eq!(summary.total, 58);
    assert_eq!(summary.enabled, 49);
    assert_eq!(summary.disabled, 9);
    assert_eq!(summary.filtered_enabled, 49);

    let tiers: Vec<(&str, usize)> = summary
        .by_tier
        .iter()
        .map(|c| (c.tier.as_str(), c.enabled))
        .collect();
    assert_eq!(
        tiers,
        vec![
            ("Mega-1", 3),
            ("Mega-2", 3),
            ("Mega-3", 2),
            ("A", 6),
            ("B", 8),
            ("C", 8),
            ("D", 8),
            ("E", 6),
            ("F", 5),
        ]
    );
}

#[test]
fn test_summary_counts_filtered_enabled() {
    let catalog: Catalog = Catalog::standard();
    let pool: PoolSelection = PoolSelection::from_defaults(&catalog);
    let filter: PoolFilter = PoolFilter {
        pokemon_type: Some(PokemonType::Steel),
        ..PoolFilter::default()
    };

    let summary: PoolSummary = PoolSummary::compute(&catalog, &pool, &filter);

    assert_eq!(summary.filtered_enabled, 9);
}

#[test]
fn test_summary_includes_mythical_tier_once_enabled() {
    let catalog: Catalog = Catalog::standard();
    let mut pool: PoolSelection = PoolSelection::empty();
    pool.bulk_set(&catalog, ["mew", "kartana", "ditto"], true);

    let summary: PoolSummary = PoolSummary::compute(&catalog, &pool, &PoolFilter::default());

    assert_eq!(
        summary.by_tier,
        vec![
            TierCount {
                tier: Tier::new("E"),
                enabled: 1
            },
            TierCount {
                tier: Tier::new("Mythical"),
                enabled: 1
            },
            TierCount {
                tier: Tier::new("UB"),
                enabled: 1
            },
        ]
    );
}
