// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain parsing and validation.
///
/// Validation in this crate is advisory: the settings and schedule models accept
/// any representable value, and these errors are reported to the presentation
/// boundary rather than blocking an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Generation is outside `1..=9`.
    InvalidGeneration(u8),
    /// Category name is not recognized.
    UnknownCategory(String),
    /// Form type name is not recognized.
    UnknownFormType(String),
    /// Elemental type name is not recognized.
    UnknownPokemonType(String),
    /// Draft order name is not recognized.
    UnknownDraftOrder(String),
    /// Weekday name is not recognized.
    UnknownDeadlineDay(String),
    /// Trade limit name is not recognized.
    UnknownTradeLimit(String),
    /// Playoff bracket size is not one of 4, 6 or 8.
    InvalidPlayoffTeams(u8),
    /// Tier cap below the `-1` unlimited sentinel.
    InvalidTierCap(i64),
    /// League name length is outside the accepted bounds.
    InvalidLeagueName {
        /// Length of the rejected name, in characters.
        length: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// Budget must be positive.
    InvalidBudget(u32),
    /// Roster minimum exceeds roster maximum.
    RosterBoundsInverted {
        /// The roster minimum.
        min: u32,
        /// The roster maximum.
        max: u32,
    },
    /// Week count must be at least 1.
    InvalidWeekCount(u32),
    /// Pick timer must be at least one second.
    InvalidPickTimer(u32),
    /// Trade cutoff week is outside `1..=week_count`.
    TradeCutoffOutOfRange {
        /// The configured cutoff week.
        cutoff: u32,
        /// The configured season length.
        week_count: u32,
    },
    /// Season start is earlier than the day after the draft.
    SeasonStartTooEarly {
        /// The draft date.
        draft_date: time::Date,
        /// The requested season start.
        season_start: time::Date,
        /// The earliest acceptable season start.
        earliest: time::Date,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a date or time from a string.
    DateParseError {
        /// The invalid input string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGeneration(generation) => {
                write!(
                    f,
                    "Invalid generation: {generation}. Must be between 1 and 9"
                )
            }
            Self::UnknownCategory(name) => write!(f, "Unknown category: {name}"),
            Self::UnknownFormType(name) => write!(f, "Unknown form type: {name}"),
            Self::UnknownPokemonType(name) => write!(f, "Unknown type: {name}"),
            Self::UnknownDraftOrder(name) => write!(f, "Unknown draft order: {name}"),
            Self::UnknownDeadlineDay(name) => write!(f, "Unknown weekday: {name}"),
            Self::UnknownTradeLimit(name) => write!(f, "Unknown trade limit: {name}"),
            Self::InvalidPlayoffTeams(count) => {
                write!(
                    f,
                    "Invalid playoff team count: {count}. Must be 4, 6 or 8"
                )
            }
            Self::InvalidTierCap(cap) => {
                write!(
                    f,
                    "Invalid tier cap: {cap}. Use -1 for unlimited or a value of 0 or more"
                )
            }
            Self::InvalidLeagueName { length, min, max } => {
                write!(
                    f,
                    "League name must be between {min} and {max} characters, got {length}"
                )
            }
            Self::InvalidBudget(budget) => {
                write!(f, "Invalid budget: {budget}. Must be greater than 0")
            }
            Self::RosterBoundsInverted { min, max } => {
                write!(
                    f,
                    "Roster minimum {min} is greater than roster maximum {max}"
                )
            }
            Self::InvalidWeekCount(count) => {
                write!(f, "Invalid week count: {count}. Must be at least 1")
            }
            Self::InvalidPickTimer(seconds) => {
                write!(f, "Invalid pick timer: {seconds}s. Must be at least 1 second")
            }
            Self::TradeCutoffOutOfRange { cutoff, week_count } => {
                write!(
                    f,
                    "Trade cutoff week {cutoff} must be between 1 and the season length of {week_count} weeks"
                )
            }
            Self::SeasonStartTooEarly {
                draft_date,
                season_start,
                earliest,
            } => {
                write!(
                    f,
                    "Season start {season_start} must be on or after {earliest} (the day after the draft on {draft_date})"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
