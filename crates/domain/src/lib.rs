// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod profile;
mod schedule;
mod settings;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogEntry};
pub use error::DomainError;
pub use profile::{CUSTOM_PROFILE_ID, Profile, ProfileStore};
pub use schedule::{Schedule, ScheduleUpdate, parse_date, parse_time};
pub use settings::{
    BannedAbilityCombo, ConditionalTierCap, RosterSize, Settings, SettingsField, SettingsUpdate,
    TierCap, TierTable, TierValue, TradeLimitKind, TradeLimits, parse_leading_int,
};
pub use types::{
    Category, DeadlineDay, DraftOrder, FormType, Generation, PlayoffTeams, PokemonType,
    TIER_ORDER, Tier, Types,
};
pub use validation::{
    LEAGUE_NAME_MAX_LEN, LEAGUE_NAME_MIN_LEN, validate_budget, validate_league_name,
    validate_schedule, validate_settings,
};
