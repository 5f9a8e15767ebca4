// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::settings::{BannedAbilityCombo, RosterSize, Settings, TierCap, TierTable, TradeLimits};
use crate::types::{DraftOrder, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Id of the sentinel profile that starts from an unconstrained rule set.
pub const CUSTOM_PROFILE_ID: &str = "custom";

/// A named preset of complete league settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description shown on the profile card.
    pub description: String,
    /// Whether the profile ships with the application.
    pub is_built_in: bool,
    /// The preset rules.
    pub settings: Settings,
}

impl Profile {
    /// Returns whether this is the `custom` sentinel.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_PROFILE_ID
    }
}

/// Read-only list of profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    /// Creates a store from an explicit list of profiles.
    #[must_use]
    pub const fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// The presets shipped with the application, `custom` last.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            standard_profile(),
            nko_profile(),
            casual_profile(),
            custom_profile(),
        ])
    }

    /// All profiles in display order.
    #[must_use]
    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    /// Returns an owned copy of the profile with `profile_id`.
    ///
    /// The copy shares nothing with the stored preset, so edits made to the returned
    /// settings never reach the store.
    #[must_use]
    pub fn select(&self, profile_id: &str) -> Option<Profile> {
        self.profiles
            .iter()
            .find(|profile| profile.id == profile_id)
            .cloned()
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tier_caps(caps: &[(&str, i64)]) -> TierTable<TierCap> {
    caps.iter()
        .map(|(tier, cap)| {
            let cap: TierCap = TierCap::try_from(*cap).unwrap_or(TierCap::Unlimited);
            (Tier::new(tier), cap)
        })
        .collect()
}

fn tier_points(points: &[(&str, u32)]) -> TierTable<u32> {
    points
        .iter()
        .map(|(tier, points)| (Tier::new(tier), *points))
        .collect()
}

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(ToString::to_string).collect()
}

const STANDARD_POINTS: [(&str, u32); 9] = [
    ("Mega-1", 20),
    ("Mega-2", 18),
    ("Mega-3", 16),
    ("A", 16),
    ("B", 12),
    ("C", 10),
    ("D", 8),
    ("E", 6),
    ("F", 4),
];

fn standard_profile() -> Profile {
    Profile {
        id: String::from("standard"),
        name: String::from("Standard"),
        description: String::from(
            "Balanced points draft with common competitive bans and the species clause",
        ),
        is_built_in: true,
        settings: Settings {
            budget: 100,
            roster_size: RosterSize { min: 8, max: 12 },
            tier_caps: tier_caps(&[
                ("Mega-1", 1),
                ("Mega-2", 1),
                ("Mega-3", 1),
                ("A", 6),
                ("B", 6),
                ("C", -1),
                ("D", -1),
                ("E", -1),
                ("F", -1),
            ]),
            tier_points: tier_points(&STANDARD_POINTS),
            conditional_tier_caps: Vec::new(),
            draft_order: DraftOrder::Snake,
            week_count: 10,
            trade_limits: TradeLimits {
                free_agent: 10,
                coach_to_coach: 5,
                grace_period: 2,
                mega_trades_per_season: 1,
            },
            trade_cutoff_week: 8,
            grace_period_hours: 24,
            pick_timer_seconds: 120,
            banned_moves: names(&["Baton Pass", "Last Respects", "Shed Tail"]),
            banned_abilities: names(&["Arena Trap", "Moody", "Shadow Tag"]),
            banned_ability_combos: BTreeSet::new(),
            banned_items: names(&["Bright Powder", "King's Rock", "Razor Fang"]),
            species_clause: true,
        },
    }
}

fn nko_profile() -> Profile {
    let mut combos: BTreeSet<BannedAbilityCombo> = BTreeSet::new();
    combos.insert(BannedAbilityCombo {
        pokemon: String::from("Kingambit"),
        ability: String::from("Supreme Overlord"),
    });

    Profile {
        id: String::from("nko"),
        name: String::from("NKO"),
        description: String::from(
            "Longer season with tight A-tier caps, mega trades and a banned ability combo",
        ),
        is_built_in: true,
        settings: Settings {
            budget: 120,
            roster_size: RosterSize { min: 10, max: 12 },
            tier_caps: tier_caps(&[
                ("Mega-1", 1),
                ("Mega-2", 1),
                ("Mega-3", 2),
                ("A", 2),
                ("B", 3),
                ("C", 4),
                ("D", -1),
                ("E", -1),
                ("F", -1),
            ]),
            tier_points: tier_points(&STANDARD_POINTS),
            conditional_tier_caps: Vec::new(),
            draft_order: DraftOrder::Snake,
            week_count: 12,
            trade_limits: TradeLimits {
                free_agent: 8,
                coach_to_coach: 6,
                grace_period: 3,
                mega_trades_per_season: 2,
            },
            trade_cutoff_week: 9,
            grace_period_hours: 48,
            pick_timer_seconds: 180,
            banned_moves: names(&["Baton Pass", "Last Respects", "Revival Blessing", "Shed Tail"]),
            banned_abilities: names(&["Arena Trap", "Moody", "Power Construct", "Shadow Tag"]),
            banned_ability_combos: combos,
            banned_items: names(&["Bright Powder", "King's Rock", "Quick Claw", "Razor Fang"]),
            species_clause: true,
        },
    }
}

fn casual_profile() -> Profile {
    Profile {
        id: String::from("casual"),
        name: String::from("Casual"),
        description: String::from("Short linear draft with no tier caps and no bans"),
        is_built_in: true,
        settings: Settings {
            budget: 80,
            roster_size: RosterSize { min: 6, max: 10 },
            tier_caps: tier_caps(&[
                ("Mega-1", -1),
                ("Mega-2", -1),
                ("Mega-3", -1),
                ("A", -1),
                ("B", -1),
                ("C", -1),
                ("D", -1),
                ("E", -1),
                ("F", -1),
            ]),
            tier_points: tier_points(&STANDARD_POINTS),
            conditional_tier_caps: Vec::new(),
            draft_order: DraftOrder::Linear,
            week_count: 8,
            trade_limits: TradeLimits {
                free_agent: 20,
                coach_to_coach: 10,
                grace_period: 5,
                mega_trades_per_season: 2,
            },
            trade_cutoff_week: 6,
            grace_period_hours: 24,
            pick_timer_seconds: 300,
            banned_moves: BTreeSet::new(),
            banned_abilities: BTreeSet::new(),
            banned_ability_combos: BTreeSet::new(),
            banned_items: BTreeSet::new(),
            species_clause: false,
        },
    }
}

fn custom_profile() -> Profile {
    Profile {
        id: String::from(CUSTOM_PROFILE_ID),
        name: String::from("Custom"),
        description: String::from("Start from scratch and configure every rule yourself"),
        is_built_in: false,
        settings: Settings {
            budget: 100,
            roster_size: RosterSize { min: 6, max: 12 },
            tier_caps: tier_caps(&[
                ("Mega-1", -1),
                ("Mega-2", -1),
                ("Mega-3", -1),
                ("A", -1),
                ("B", -1),
                ("C", -1),
                ("D", -1),
                ("E", -1),
                ("F", -1),
            ]),
            tier_points: tier_points(&STANDARD_POINTS),
            conditional_tier_caps: Vec::new(),
            draft_order: DraftOrder::Snake,
            week_count: 10,
            trade_limits: TradeLimits::default(),
            trade_cutoff_week: 8,
            grace_period_hours: 24,
            pick_timer_seconds: 120,
            banned_moves: BTreeSet::new(),
            banned_abilities: BTreeSet::new(),
            banned_ability_combos: BTreeSet::new(),
            banned_items: BTreeSet::new(),
            species_clause: true,
        },
    }
}
