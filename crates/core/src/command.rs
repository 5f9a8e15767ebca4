// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use draft_league_domain::{Category, Generation, ScheduleUpdate, SettingsUpdate};

/// A command represents user intent as data only.
///
/// Commands are the only way to change a wizard session. A command that cannot take
/// effect (failed gate, unknown id, session already created) leaves the session as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose a profile, replacing the working settings with a fresh copy of its
    /// preset.
    SelectProfile {
        /// The profile id.
        profile_id: String,
    },
    /// Replace one settings field.
    UpdateSettings(SettingsUpdate),
    /// Flip one catalog entry in or out of the pool.
    TogglePokemon {
        /// The catalog id.
        id: String,
    },
    /// Enable or disable a list of catalog entries.
    BulkToggle {
        /// The catalog ids.
        ids: Vec<String>,
        /// Target state.
        enabled: bool,
    },
    /// Enable or disable every entry of a category.
    ToggleCategory {
        /// The category.
        category: Category,
        /// Target state.
        enabled: bool,
    },
    /// Enable or disable every entry of a generation.
    ToggleGeneration {
        /// The generation.
        generation: Generation,
        /// Target state.
        enabled: bool,
    },
    /// Restore the default pool.
    ResetPool,
    /// Replace one schedule field.
    UpdateSchedule(ScheduleUpdate),
    /// Set the league name.
    SetLeagueName {
        /// The name as typed.
        name: String,
    },
    /// Set the league description.
    SetDescription {
        /// The description as typed.
        description: String,
    },
    /// Jump back to an earlier step.
    GoToStep {
        /// The 1-based target step.
        step: u8,
    },
    /// Move to the next step if the current step's gate passes.
    Advance,
    /// Move to the previous step.
    Back,
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectProfile { .. } => "SelectProfile",
            Self::UpdateSettings(_) => "UpdateSettings",
            Self::TogglePokemon { .. } => "TogglePokemon",
            Self::BulkToggle { .. } => "BulkToggle",
            Self::ToggleCategory { .. } => "ToggleCategory",
            Self::ToggleGeneration { .. } => "ToggleGeneration",
            Self::ResetPool => "ResetPool",
            Self::UpdateSchedule(_) => "UpdateSchedule",
            Self::SetLeagueName { .. } => "SetLeagueName",
            Self::SetDescription { .. } => "SetDescription",
            Self::GoToStep { .. } => "GoToStep",
            Self::Advance => "Advance",
            Self::Back => "Back",
        }
    }
}
