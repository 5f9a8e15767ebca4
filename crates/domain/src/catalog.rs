// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only catalog of draftable entries.
//!
//! The catalog is seeded once at startup and never mutated. Every query is a lazy
//! view over the entries in insertion order; absence yields an empty view (or `None`
//! for [`Catalog::by_id`]).

use crate::types::{Category, FormType, Generation, PokemonType, Tier, Types};
use serde::{Deserialize, Serialize};

/// A draftable entry with immutable attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier (e.g. `"landorus-therian"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Draft-cost bracket.
    pub tier: Tier,
    /// Point cost against the budget.
    pub points: u32,
    /// Species this entry is a form of.
    pub base_species: String,
    /// Which form of the base species this is.
    pub form_type: FormType,
    /// Game generation the entry was introduced in.
    pub generation: Generation,
    /// Rarity category.
    pub category: Category,
    /// One or two elemental types.
    pub types: Types,
    /// Whether the entry is in the pool before any manual override.
    pub is_enabled_by_default: bool,
}

/// The immutable list of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from an explicit list of entries.
    ///
    /// Insertion order is preserved and becomes the order of every view.
    #[must_use]
    pub const fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in sample pool.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_POOL.iter().map(Seed::to_entry).collect())
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether an entry with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id(id).is_some()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in `tier`.
    pub fn by_tier<'a>(&'a self, tier: &'a Tier) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |entry| &entry.tier == tier)
    }

    /// Entries introduced in `generation`.
    pub fn by_generation(&self, generation: Generation) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.generation == generation)
    }

    /// Entries in `category`.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Entries having `pokemon_type` in either type slot.
    pub fn by_type(&self, pokemon_type: PokemonType) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.types.contains(pokemon_type))
    }

    /// Ids of every entry, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    /// Ids of the entries enabled by default.
    pub fn default_enabled_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.is_enabled_by_default)
            .map(|entry| entry.id.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Compact seed row for the built-in pool.
struct Seed {
    id: &'static str,
    name: &'static str,
    tier: &'static str,
    points: u32,
    base_species: &'static str,
    form_type: FormType,
    generation: Generation,
    category: Category,
    types: Types,
    enabled: bool,
}

impl Seed {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            id: self.id.to_string(),
            name: self.name.to_string(),
            tier: Tier::new(self.tier),
            points: self.points,
            base_species: self.base_species.to_string(),
            form_type: self.form_type,
            generation: self.generation,
            category: self.category,
            types: self.types,
            is_enabled_by_default: self.enabled,
        }
    }
}

macro_rules! seed {
    ($id:literal, $name:literal, $tier:literal, $points:literal, $base:literal, $form:ident,
     $gen:literal, $cat:ident, [$t1:ident], $enabled:literal) => {
        Seed {
            id: $id,
            name: $name,
            tier: $tier,
            points: $points,
            base_species: $base,
            form_type: FormType::$form,
            generation: Generation::new_unchecked($gen),
            category: Category::$cat,
            types: Types::single(PokemonType::$t1),
            enabled: $enabled,
        }
    };
    ($id:literal, $name:literal, $tier:literal, $points:literal, $base:literal, $form:ident,
     $gen:literal, $cat:ident, [$t1:ident, $t2:ident], $enabled:literal) => {
        Seed {
            id: $id,
            name: $name,
            tier: $tier,
            points: $points,
            base_species: $base,
            form_type: FormType::$form,
            generation: Generation::new_unchecked($gen),
            category: Category::$cat,
            types: Types::dual(PokemonType::$t1, PokemonType::$t2),
            enabled: $enabled,
        }
    };
}

#[rustfmt::skip]
const STANDARD_POOL: [Seed; 58] = [
    // Mega tiers
    seed!("charizard-mega-x", "Charizard-Mega-X", "Mega-1", 20, "Charizard", Mega, 1, Standard, [Fire, Dragon], true),
    seed!("charizard-mega-y", "Charizard-Mega-Y", "Mega-1", 20, "Charizard", Mega, 1, Standard, [Fire, Flying], true),
    seed!("blaziken-mega", "Blaziken-Mega", "Mega-1", 20, "Blaziken", Mega, 3, Standard, [Fire, Fighting], true),
    seed!("garchomp-mega", "Garchomp-Mega", "Mega-2", 18, "Garchomp", Mega, 4, Standard, [Dragon, Ground], true),
    seed!("scizor-mega", "Scizor-Mega", "Mega-2", 18, "Scizor", Mega, 2, Standard, [Bug, Steel], true),
    seed!("mawile-mega", "Mawile-Mega", "Mega-2", 18, "Mawile", Mega, 3, Standard, [Steel, Fairy], true),
    seed!("lopunny-mega", "Lopunny-Mega", "Mega-3", 16, "Lopunny", Mega, 4, Standard, [Normal, Fighting], true),
    seed!("venusaur-mega", "Venusaur-Mega", "Mega-3", 16, "Venusaur", Mega, 1, Standard, [Grass, Poison], true),
    // A
    seed!("dragapult", "Dragapult", "A", 16, "Dragapult", Base, 8, Standard, [Dragon, Ghost], true),
    seed!("kingambit", "Kingambit", "A", 16, "Kingambit", Base, 9, Standard, [Dark, Steel], true),
    seed!("landorus-therian", "Landorus-Therian", "A", 16, "Landorus", Other, 5, Legendary, [Ground, Flying], true),
    seed!("garchomp", "Garchomp", "A", 16, "Garchomp", Base, 4, Standard, [Dragon, Ground], true),
    seed!("volcarona", "Volcarona", "A", 16, "Volcarona", Base, 5, Standard, [Bug, Fire], true),
    seed!("heatran", "Heatran", "A", 16, "Heatran", Base, 4, Legendary, [Fire, Steel], true),
    // B
    seed!("toxapex", "Toxapex", "B", 12, "Toxapex", Base, 7, Standard, [Poison, Water], true),
    seed!("ferrothorn", "Ferrothorn", "B", 12, "Ferrothorn", Base, 5, Standard, [Grass, Steel], true),
    seed!("clefable", "Clefable", "B", 12, "Clefable", Base, 1, Standard, [Fairy], true),
    seed!("rotom-wash", "Rotom-Wash", "B", 12, "Rotom", Other, 4, Standard, [Electric, Water], true),
    seed!("weavile", "Weavile", "B", 12, "Weavile", Base, 4, Standard, [Dark, Ice], true),
    seed!("urshifu", "Urshifu", "B", 12, "Urshifu", Base, 8, Legendary, [Fighting, Dark], true),
    seed!("urshifu-rapid-strike", "Urshifu-Rapid-Strike", "B", 12, "Urshifu", Other, 8, Legendary, [Fighting, Water], true),
    seed!("rillaboom", "Rillaboom", "B", 12, "Rillaboom", Base, 8, Standard, [Grass], true),
    // C
    seed!("slowking-galar", "Slowking-Galar", "C", 10, "Slowking", Regional, 8, Standard, [Poison, Psychic], true),
    seed!("magnezone", "Magnezone", "C", 10, "Magnezone", Base, 4, Standard, [Electric, Steel], true),
    seed!("excadrill", "Excadrill", "C", 10, "Excadrill", Base, 5, Standard, [Ground, Steel], true),
    seed!("dragonite", "Dragonite", "C", 10, "Dragonite", Base, 1, Standard, [Dragon, Flying], true),
    seed!("zapdos", "Zapdos", "C", 10, "Zapdos", Base, 1, Legendary, [Electric, Flying], true),
    seed!("moltres", "Moltres", "C", 10, "Moltres", Base, 1, Legendary, [Fire, Flying], true),
    seed!("articuno", "Articuno", "C", 10, "Articuno", Base, 1, Legendary, [Ice, Flying], true),
    seed!("ninetales-alola", "Ninetales-Alola", "C", 10, "Ninetales", Regional, 7, Standard, [Ice, Fairy], true),
    // D
    seed!("scizor", "Scizor", "D", 8, "Scizor", Base, 2, Standard, [Bug, Steel], true),
    seed!("alakazam", "Alakazam", "D", 8, "Alakazam", Base, 1, Standard, [Psychic], true),
    seed!("gengar", "Gengar", "D", 8, "Gengar", Base, 1, Standard, [Ghost, Poison], true),
    seed!("gyarados", "Gyarados", "D", 8, "Gyarados", Base, 1, Standard, [Water, Flying], true),
    seed!("tyranitar", "Tyranitar", "D", 8, "Tyranitar", Base, 2, Standard, [Rock, Dark], true),
    seed!("hydreigon", "Hydreigon", "D", 8, "Hydreigon", Base, 5, Standard, [Dark, Dragon], true),
    seed!("blissey", "Blissey", "D", 8, "Blissey", Base, 2, Standard, [Normal], true),
    seed!("hippowdon", "Hippowdon", "D", 8, "Hippowdon", Base, 4, Standard, [Ground], true),
    // E
    seed!("azumarill", "Azumarill", "E", 6, "Azumarill", Base, 2, Standard, [Water, Fairy], true),
    seed!("torkoal", "Torkoal", "E", 6, "Torkoal", Base, 3, Standard, [Fire], true),
    seed!("pelipper", "Pelipper", "E", 6, "Pelipper", Base, 3, Standard, [Water, Flying], true),
    seed!("amoonguss", "Amoonguss", "E", 6, "Amoonguss", Base, 5, Standard, [Grass, Poison], true),
    seed!("quagsire", "Quagsire", "E", 6, "Quagsire", Base, 2, Standard, [Water, Ground], true),
    seed!("ditto", "Ditto", "E", 6, "Ditto", Base, 1, Standard, [Normal], true),
    // F
    seed!("dugtrio", "Dugtrio", "F", 4, "Dugtrio", Base, 1, Standard, [Ground], true),
    seed!("perrserker", "Perrserker", "F", 4, "Perrserker", Base, 8, Standard, [Steel], true),
    seed!("zoroark", "Zoroark", "F", 4, "Zoroark", Base, 5, Standard, [Dark], true),
    seed!("zoroark-hisui", "Zoroark-Hisui", "F", 4, "Zoroark", Regional, 8, Standard, [Normal, Ghost], true),
    seed!("breloom", "Breloom", "F", 4, "Breloom", Base, 3, Standard, [Grass, Fighting], true),
    // Mythicals, off by default
    seed!("mew", "Mew", "Mythical", 20, "Mew", Base, 1, Mythical, [Psychic], false),
    seed!("celebi", "Celebi", "Mythical", 18, "Celebi", Base, 2, Mythical, [Psychic, Grass], false),
    seed!("jirachi", "Jirachi", "Mythical", 18, "Jirachi", Base, 3, Mythical, [Steel, Psychic], false),
    seed!("victini", "Victini", "Mythical", 18, "Victini", Base, 5, Mythical, [Psychic, Fire], false),
    // Ultra beasts, off by default
    seed!("nihilego", "Nihilego", "UB", 14, "Nihilego", Base, 7, UltraBeast, [Rock, Poison], false),
    seed!("buzzwole", "Buzzwole", "UB", 14, "Buzzwole", Base, 7, UltraBeast, [Bug, Fighting], false),
    seed!("pheromosa", "Pheromosa", "UB", 16, "Pheromosa", Base, 7, UltraBeast, [Bug, Fighting], false),
    seed!("kartana", "Kartana", "UB", 16, "Kartana", Base, 7, UltraBeast, [Grass, Steel], false),
    seed!("naganadel", "Naganadel", "UB", 16, "Naganadel", Base, 7, UltraBeast, [Poison, Dragon], false),
];
