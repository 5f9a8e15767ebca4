// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, CatalogEntry, Category, Generation, PokemonType, Tier};

fn ids<'a>(entries: impl Iterator<Item = &'a CatalogEntry>) -> Vec<&'a str> {
    entries.map(|entry| entry.id.as_str()).collect()
}

#[test]
fn test_standard_catalog_has_58_entries() {
    let catalog: Catalog = Catalog::standard();
    assert_eq!(catalog.len(), 58);
    assert!(!catalog.is_empty());
}

#[test]
fn test_standard_catalog_ids_are_unique() {
    let catalog: Catalog = Catalog::standard();
    let unique: std::collections::HashSet<&str> = catalog.ids().collect();
    assert_eq!(unique.len(), catalog.len());
}

#[test]
fn test_mythicals_and_ultra_beasts_are_disabled_by_default() {
    let catalog: Catalog = Catalog::standard();

    for entry in catalog.entries() {
        let expected: bool = !matches!(entry.category, Category::Mythical | Category::UltraBeast);
        assert_eq!(entry.is_enabled_by_default, expected, "{}", entry.id);
    }
    assert_eq!(catalog.default_enabled_ids().count(), 49);
}

#[test]
fn test_by_id_finds_entry() {
    let catalog: Catalog = Catalog::standard();
    let entry: &CatalogEntry = catalog.by_id("landorus-therian").unwrap();

    assert_eq!(entry.name, "Landorus-Therian");
    assert_eq!(entry.base_species, "Landorus");
    assert_eq!(entry.tier, Tier::new("A"));
    assert_eq!(entry.category, Category::Legendary);
    assert!(entry.types.contains(PokemonType::Flying));
}

#[test]
fn test_by_id_unknown_is_none() {
    let catalog: Catalog = Catalog::standard();
    assert!(catalog.by_id("missingno").is_none());
    assert!(!catalog.contains("missingno"));
}

#[test]
fn test_by_category_counts() {
    let catalog: Catalog = Catalog::standard();
    assert_eq!(catalog.by_category(Category::Standard).count(), 42);
    assert_eq!(catalog.by_category(Category::Legendary).count(), 7);
    assert_eq!(catalog.by_category(Category::Mythical).count(), 4);
    assert_eq!(catalog.by_category(Category::UltraBeast).count(), 5);
}

#[test]
fn test_by_generation_preserves_insertion_order() {
    let catalog: Catalog = Catalog::standard();
    let gen_one: Vec<&str> = ids(catalog.by_generation(Generation::new(1).unwrap()));

    assert_eq!(
        gen_one,
        vec![
            "charizard-mega-x",
            "charizard-mega-y",
            "venusaur-mega",
            "clefable",
            "dragonite",
            "zapdos",
            "moltres",
            "articuno",
            "alakazam",
            "gengar",
            "gyarados",
            "ditto",
            "dugtrio",
            "mew",
        ]
    );
}

#[test]
fn test_by_tier() {
    let catalog: Catalog = Catalog::standard();
    let tier: Tier = Tier::new("Mega-3");
    assert_eq!(ids(catalog.by_tier(&tier)), vec!["lopunny-mega", "venusaur-mega"]);

    let unknown: Tier = Tier::new("Z");
    assert_eq!(catalog.by_tier(&unknown).count(), 0);
}

#[test]
fn test_by_type_matches_either_slot() {
    let catalog: Catalog = Catalog::standard();
    let steel: Vec<&str> = ids(catalog.by_type(PokemonType::Steel));

    assert_eq!(steel.len(), 11);
    // primary slot
    assert!(steel.contains(&"perrserker"));
    // secondary slot
    assert!(steel.contains(&"kingambit"));
    assert!(!steel.contains(&"garchomp"));
}

#[test]
fn test_empty_catalog_views_are_empty() {
    let catalog: Catalog = Catalog::new(Vec::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.by_category(Category::Standard).count(), 0);
    assert_eq!(catalog.default_enabled_ids().count(), 0);
}
