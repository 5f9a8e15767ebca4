// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use draft_league_domain::{Catalog, Category, Generation};
use std::collections::HashSet;

/// The set of catalog ids currently enabled for drafting.
///
/// Membership is only ever changed through catalog-aware operations, so the set
/// never holds an id the catalog does not know. Ids that are not in the catalog
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolSelection {
    enabled: HashSet<String>,
}

impl PoolSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the default selection: every entry enabled by default.
    #[must_use]
    pub fn from_defaults(catalog: &Catalog) -> Self {
        Self {
            enabled: catalog.default_enabled_ids().map(String::from).collect(),
        }
    }

    /// Returns whether `id` is enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.contains(id)
    }

    /// Number of enabled entries.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }

    /// Enabled ids in catalog order.
    #[must_use]
    pub fn enabled_ids<'a>(&'a self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog.ids().filter(|id| self.is_enabled(id)).collect()
    }

    /// Flips membership of `id`.
    ///
    /// Returns `false` without changing anything when the id is not in the catalog.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            return false;
        }
        if !self.enabled.remove(id) {
            self.enabled.insert(id.to_string());
        }
        true
    }

    /// Enables or disables every listed id. Unknown ids are skipped.
    pub fn bulk_set<I, S>(&mut self, catalog: &Catalog, ids: I, enabled: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id: &str = id.as_ref();
            if catalog.contains(id) {
                self.set(id, enabled);
            }
        }
    }

    /// Enables or disables every entry of `category`.
    pub fn set_category(&mut self, catalog: &Catalog, category: Category, enabled: bool) {
        for entry in catalog.by_category(category) {
            self.set(&entry.id, enabled);
        }
    }

    /// Enables or disables every entry of `generation`.
    pub fn set_generation(&mut self, catalog: &Catalog, generation: Generation, enabled: bool) {
        for entry in catalog.by_generation(generation) {
            self.set(&entry.id, enabled);
        }
    }

    /// Restores the default selection.
    pub fn reset_to_default(&mut self, catalog: &Catalog) {
        *self = Self::from_defaults(catalog);
    }

    fn set(&mut self, id: &str, enabled: bool) {
        if enabled {
            self.enabled.insert(id.to_string());
        } else {
            self.enabled.remove(id);
        }
    }
}
