// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views over the catalog combined with a pool selection.

use crate::pool::PoolSelection;
use draft_league_domain::{Catalog, CatalogEntry, Category, Generation, PokemonType, Tier};
use serde::{Deserialize, Serialize};

/// Which entries a filter keeps by selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every entry regardless of selection.
    #[default]
    All,
    /// Only entries in the pool.
    Enabled,
    /// Only entries left out of the pool.
    Disabled,
}

impl StatusFilter {
    const fn accepts(self, enabled: bool) -> bool {
        match self {
            Self::All => true,
            Self::Enabled => enabled,
            Self::Disabled => !enabled,
        }
    }
}

/// A conjunction of optional predicates over catalog entries.
///
/// An unset field places no constraint. The search text matches a case-insensitive
/// substring of the entry name, taken as typed. Only the empty string is treated
/// as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolFilter {
    /// Text the entry name must contain, ignoring case.
    pub search: Option<String>,
    /// Generation the entry was introduced in.
    pub generation: Option<Generation>,
    /// Type the entry must have, as either of its types.
    pub pokemon_type: Option<PokemonType>,
    /// Exact tier.
    pub tier: Option<Tier>,
    /// Exact category.
    pub category: Option<Category>,
    /// Selection state to keep.
    #[serde(default)]
    pub status: StatusFilter,
}

impl PoolFilter {
    /// Returns whether `entry` satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry, selection: &PoolSelection) -> bool {
        if self
            .search_text()
            .is_some_and(|search| !entry.name.to_lowercase().contains(&search))
        {
            return false;
        }
        if self.generation.is_some_and(|g| g != entry.generation) {
            return false;
        }
        if self.pokemon_type.is_some_and(|t| !entry.types.contains(t)) {
            return false;
        }
        if self.tier.as_ref().is_some_and(|t| *t != entry.tier) {
            return false;
        }
        if self.category.is_some_and(|c| c != entry.category) {
            return false;
        }
        self.status.accepts(selection.is_enabled(&entry.id))
    }

    /// The catalog subsequence satisfying the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        catalog: &'a Catalog,
        selection: &PoolSelection,
    ) -> Vec<&'a CatalogEntry> {
        catalog
            .entries()
            .iter()
            .filter(|entry| self.matches(entry, selection))
            .collect()
    }

    fn search_text(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Enabled entries counted for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    /// The tier counted.
    pub tier: Tier,
    /// Enabled entries in the tier.
    pub enabled: usize,
}

/// Counts shown on the pool and review screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    /// Entries in the catalog.
    pub total: usize,
    /// Entries currently enabled.
    pub enabled: usize,
    /// Entries currently disabled.
    pub disabled: usize,
    /// Enabled entries within the filtered view.
    pub filtered_enabled: usize,
    /// Enabled entries per tier, canonical tiers first. Tiers with nothing enabled
    /// are omitted.
    pub by_tier: Vec<TierCount>,
}

impl PoolSummary {
    /// Summarises `selection` against `catalog`, counting the filtered view with
    /// `filter`.
    #[must_use]
    pub fn compute(catalog: &Catalog, selection: &PoolSelection, filter: &PoolFilter) -> Self {
        let total: usize = catalog.len();
        let enabled_entries: Vec<&CatalogEntry> = catalog
            .entries()
            .iter()
            .filter(|entry| selection.is_enabled(&entry.id))
            .collect();
        let enabled: usize = enabled_entries.len();
        let filtered_enabled: usize = filter
            .apply(catalog, selection)
            .into_iter()
            .filter(|entry| selection.is_enabled(&entry.id))
            .count();

        Self {
            total,
            enabled,
            disabled: total - enabled,
            filtered_enabled,
            by_tier: tier_breakdown(&enabled_entries),
        }
    }
}

fn tier_breakdown(entries: &[&CatalogEntry]) -> Vec<TierCount> {
    let mut counts: Vec<TierCount> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|c| c.tier == entry.tier) {
            Some(count) => count.enabled += 1,
            None => counts.push(TierCount {
                tier: entry.tier.clone(),
                enabled: 1,
            }),
        }
    }
    // Stable sort keeps first-seen order for tiers outside the canonical list.
    counts.sort_by_key(|c| c.tier.canonical_rank().unwrap_or(usize::MAX));
    counts
}
