// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draft and season calendar.
//!
//! Dates travel as `YYYY-MM-DD` and times as `HH:MM`. An unset date is `None`, which
//! is what the schedule step gate checks for.

use crate::error::DomainError;
use crate::types::{DeadlineDay, PlayoffTeams};
use serde::{Deserialize, Serialize};
use time::macros::{format_description, time};
use time::{Date, Duration, Time};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

/// Draft and season calendar settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Day the draft takes place.
    #[serde(with = "iso_date::option")]
    pub draft_date: Option<Date>,
    /// Time of day the draft starts.
    #[serde(with = "clock_time")]
    pub draft_time: Time,
    /// First day of the regular season.
    #[serde(with = "iso_date::option")]
    pub season_start_date: Option<Date>,
    /// Day weekly lineups lock.
    pub weekly_deadline_day: DeadlineDay,
    /// Time weekly lineups lock.
    #[serde(with = "clock_time")]
    pub weekly_deadline_time: Time,
    /// Whether the season ends in playoffs.
    pub playoffs_enabled: bool,
    /// Playoff bracket size.
    pub playoff_teams: PlayoffTeams,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            draft_date: None,
            draft_time: time!(19:00),
            season_start_date: None,
            weekly_deadline_day: DeadlineDay::Sunday,
            weekly_deadline_time: time!(23:59),
            playoffs_enabled: true,
            playoff_teams: PlayoffTeams::Six,
        }
    }
}

/// A replacement for exactly one schedule field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ScheduleUpdate {
    /// Draft day, or `None` to clear it.
    DraftDate(#[serde(with = "iso_date::option")] Option<Date>),
    /// Draft start time.
    DraftTime(#[serde(with = "clock_time")] Time),
    /// Season start, or `None` to clear it.
    SeasonStartDate(#[serde(with = "iso_date::option")] Option<Date>),
    /// Lineup lock day.
    WeeklyDeadlineDay(DeadlineDay),
    /// Lineup lock time.
    WeeklyDeadlineTime(#[serde(with = "clock_time")] Time),
    /// Whether the season ends in playoffs.
    PlayoffsEnabled(bool),
    /// Playoff bracket size.
    PlayoffTeams(PlayoffTeams),
}

impl Schedule {
    /// Produces a new schedule with the single field named by `update` replaced.
    #[must_use]
    pub const fn apply(&self, update: ScheduleUpdate) -> Self {
        let mut next: Self = *self;
        match update {
            ScheduleUpdate::DraftDate(date) => next.draft_date = date,
            ScheduleUpdate::DraftTime(at) => next.draft_time = at,
            ScheduleUpdate::SeasonStartDate(date) => next.season_start_date = date,
            ScheduleUpdate::WeeklyDeadlineDay(day) => next.weekly_deadline_day = day,
            ScheduleUpdate::WeeklyDeadlineTime(at) => next.weekly_deadline_time = at,
            ScheduleUpdate::PlayoffsEnabled(enabled) => next.playoffs_enabled = enabled,
            ScheduleUpdate::PlayoffTeams(teams) => next.playoff_teams = teams,
        }
        next
    }

    /// Returns whether both the draft date and the season start date are set.
    #[must_use]
    pub const fn has_required_dates(&self) -> bool {
        self.draft_date.is_some() && self.season_start_date.is_some()
    }

    /// The earliest season start the date picker offers: the day after the draft.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the draft is on the last
    /// representable day.
    pub fn min_season_start(&self) -> Result<Option<Date>, DomainError> {
        self.draft_date
            .map(|draft| add_days(draft, 1, "computing the earliest season start"))
            .transpose()
    }

    /// Start date of regular season week `week` (1-based).
    ///
    /// Returns `Ok(None)` when the season start is unset or `week` is 0.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` on calendar overflow.
    pub fn week_start(&self, week: u32) -> Result<Option<Date>, DomainError> {
        let Some(start) = self.season_start_date else {
            return Ok(None);
        };
        if week == 0 {
            return Ok(None);
        }
        add_days(
            start,
            i64::from(week - 1) * 7,
            "computing the start of a season week",
        )
        .map(Some)
    }

    /// The day the regular season ends: `week_count` whole weeks after the start.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` on calendar overflow.
    pub fn season_end_date(&self, week_count: u32) -> Result<Option<Date>, DomainError> {
        self.season_start_date
            .map(|start| {
                add_days(
                    start,
                    i64::from(week_count) * 7,
                    "computing the season end date",
                )
            })
            .transpose()
    }
}

fn add_days(date: Date, days: i64, operation: &str) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation.to_string(),
        })
}

/// Parses a `YYYY-MM-DD` date. Blank input yields `Ok(None)`.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input is not a valid calendar date.
pub fn parse_date(input: &str) -> Result<Option<Date>, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|e| DomainError::DateParseError {
            date_string: input.to_string(),
            error: e.to_string(),
        })
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input is not a valid time.
pub fn parse_time(input: &str) -> Result<Time, DomainError> {
    Time::parse(input.trim(), format_description!("[hour]:[minute]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: input.to_string(),
            error: e.to_string(),
        }
    })
}
