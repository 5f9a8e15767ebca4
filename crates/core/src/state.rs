// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::invite::InviteCode;
use crate::pool::PoolSelection;
use draft_league_domain::{Catalog, Profile, Schedule, Settings};
use serde::{Deserialize, Serialize};

/// The six wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Step {
    /// Pick a preset profile.
    Profile = 1,
    /// Name and describe the league.
    Basics = 2,
    /// Adjust the rule set.
    Rules = 3,
    /// Choose the draftable pool.
    Pool = 4,
    /// Set the draft and season dates.
    Schedule = 5,
    /// Confirm and create.
    Review = 6,
}

impl Step {
    /// Every step in wizard order.
    pub const ALL: [Self; 6] = [
        Self::Profile,
        Self::Basics,
        Self::Rules,
        Self::Pool,
        Self::Schedule,
        Self::Review,
    ];

    /// The 1-based step number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a step by its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Profile),
            2 => Some(Self::Basics),
            3 => Some(Self::Rules),
            4 => Some(Self::Pool),
            5 => Some(Self::Schedule),
            6 => Some(Self::Review),
            _ => None,
        }
    }

    /// The following step, or `None` on the review step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, or `None` on the first step.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Heading shown in the step indicator.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Profile => "Choose Profile",
            Self::Basics => "League Basics",
            Self::Rules => "Rules",
            Self::Pool => "Pokemon Pool",
            Self::Schedule => "Schedule",
            Self::Review => "Review",
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| format!("Invalid wizard step: {number}"))
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Whether the session is still being configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "invite_code", rename_all = "snake_case")]
pub enum SessionStatus {
    /// The league has not been created yet.
    InProgress,
    /// The league exists; the session accepts no further changes.
    Created(InviteCode),
}

/// One user's in-progress league configuration.
///
/// Sessions are values: [`crate::apply`] consumes a reference and returns the next
/// session, leaving the input untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    /// The step currently shown.
    pub step: Step,
    /// The chosen profile, as selected (later settings edits do not touch it).
    pub profile: Option<Profile>,
    /// League name as typed.
    pub league_name: String,
    /// Free-form description.
    pub description: String,
    /// Working rule set, copied from the profile on selection.
    pub settings: Option<Settings>,
    /// Enabled catalog entries.
    pub pool: PoolSelection,
    /// Draft and season calendar.
    pub schedule: Schedule,
    /// Lifecycle state.
    pub status: SessionStatus,
}

impl WizardSession {
    /// Creates a session on the first step with the default pool and schedule.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            step: Step::Profile,
            profile: None,
            league_name: String::new(),
            description: String::new(),
            settings: None,
            pool: PoolSelection::from_defaults(catalog),
            schedule: Schedule::default(),
            status: SessionStatus::InProgress,
        }
    }

    /// Returns whether the league has been created.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self.status, SessionStatus::Created(_))
    }

    /// The invite code, once the league exists.
    #[must_use]
    pub const fn invite_code(&self) -> Option<&InviteCode> {
        match &self.status {
            SessionStatus::Created(code) => Some(code),
            SessionStatus::InProgress => None,
        }
    }
}
