// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use draft_league::{PoolSummary, SessionStatus};
use draft_league_domain::{
    CatalogEntry, Profile, Schedule, ScheduleUpdate, Settings, SettingsField, SettingsUpdate,
};
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Catalog query parameters.
///
/// Every field is optional; enum-valued fields are parsed at the boundary so a bad
/// value is reported as invalid input rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Generation, `1..=9`.
    pub generation: Option<u8>,
    /// Type name, any case.
    #[serde(rename = "type")]
    pub pokemon_type: Option<String>,
    /// Exact tier name.
    pub tier: Option<String>,
    /// Category in snake case.
    pub category: Option<String>,
    /// `all`, `enabled` or `disabled`.
    pub status: Option<String>,
    /// Session whose pool selection the status filter and summary use. Without it
    /// the default selection is used.
    pub session_id: Option<String>,
}

/// A catalog entry with its selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryView {
    /// The entry itself, flattened into the view.
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Whether the entry is in the pool.
    pub enabled: bool,
}

/// API response for a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Matching entries in catalog order.
    pub entries: Vec<CatalogEntryView>,
    /// Pool counts, with the filtered count for this query.
    pub summary: PoolSummary,
}

/// API response listing the profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilesResponse {
    /// Profiles in display order.
    pub profiles: Vec<Profile>,
}

/// API request carrying one wizard command.
///
/// This DTO is distinct from the core command and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandRequest {
    /// Start from a preset.
    SelectProfile {
        /// Id of the preset.
        profile_id: String,
    },
    /// Replace one settings field.
    UpdateSettings {
        /// The field and its new value.
        update: SettingsUpdate,
    },
    /// Flip one entry in or out of the pool.
    TogglePokemon {
        /// Catalog id.
        id: String,
    },
    /// Set many entries at once.
    BulkToggle {
        /// Catalog ids; duplicates and unknown ids are allowed.
        ids: Vec<String>,
        /// Target state.
        enabled: bool,
    },
    /// Set every entry of a category.
    ToggleCategory {
        /// Category in snake case.
        category: String,
        /// Target state.
        enabled: bool,
    },
    /// Set every entry of a generation.
    ToggleGeneration {
        /// Generation, `1..=9`.
        generation: u8,
        /// Target state.
        enabled: bool,
    },
    /// Restore the default pool.
    ResetPool,
    /// Replace one schedule field.
    UpdateSchedule {
        /// The field and its new value.
        update: ScheduleUpdate,
    },
    /// Rename the league.
    SetLeagueName {
        /// The new name.
        name: String,
    },
    /// Replace the description.
    SetDescription {
        /// The new description.
        description: String,
    },
    /// Jump back to an earlier step.
    GoToStep {
        /// Target step number.
        step: u8,
    },
    /// Move forward if the current gate passes.
    Advance,
    /// Move back one step.
    Back,
}

/// API request carrying raw text typed into a numeric settings field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSettingsInput {
    /// The field being edited.
    pub target: SettingsField,
    /// The text as typed.
    pub value: String,
}

/// Whether one step's gate currently passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateView {
    /// Step number.
    pub step: u8,
    /// Step title.
    pub title: String,
    /// Whether the gate leaving this step passes.
    pub passes: bool,
}

/// Dates derived from the schedule and settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDerived {
    /// The earliest season start the date picker offers.
    #[serde(with = "iso_date::option")]
    pub min_season_start: Option<Date>,
    /// Last day of the regular season.
    #[serde(with = "iso_date::option")]
    pub season_end_date: Option<Date>,
}

/// Everything a presentation layer needs to render a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Id to address the session with.
    pub session_id: String,
    /// Current step number.
    pub step: u8,
    /// Current step title.
    pub step_title: String,
    /// Lifecycle state.
    pub status: SessionStatus,
    /// Selected profile, if any.
    pub profile_id: Option<String>,
    /// League name as typed.
    pub league_name: String,
    /// League description as typed.
    pub description: String,
    /// Current rules; `None` until a profile is selected.
    pub settings: Option<Settings>,
    /// Draft and season calendar.
    pub schedule: Schedule,
    /// Dates derived from the schedule.
    pub schedule_derived: ScheduleDerived,
    /// Enabled catalog ids in catalog order.
    pub enabled_ids: Vec<String>,
    /// Pool counts.
    pub pool: PoolSummary,
    /// Gate state of every step.
    pub gates: Vec<GateView>,
    /// Whether `advance` would move forward now.
    pub can_advance: bool,
    /// Advisory rule violations to display; they never block navigation.
    pub advisories: Vec<String>,
}

/// API response for a successful league creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Code other coaches use to join.
    pub invite_code: String,
    /// Name of the created league.
    pub league_name: String,
    /// A success message.
    pub message: String,
    /// Link other coaches use to join.
    pub invite_url: String,
}
