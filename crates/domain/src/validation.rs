// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::Schedule;
use crate::settings::Settings;

/// Shortest accepted league name, in characters.
pub const LEAGUE_NAME_MIN_LEN: usize = 3;
/// Longest accepted league name, in characters.
pub const LEAGUE_NAME_MAX_LEN: usize = 50;

/// Validates the league name length.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns `DomainError::InvalidLeagueName` if the name is shorter than 3 or longer
/// than 50 characters.
pub fn validate_league_name(name: &str) -> Result<(), DomainError> {
    let length: usize = name.chars().count();
    if !(LEAGUE_NAME_MIN_LEN..=LEAGUE_NAME_MAX_LEN).contains(&length) {
        return Err(DomainError::InvalidLeagueName {
            length,
            min: LEAGUE_NAME_MIN_LEN,
            max: LEAGUE_NAME_MAX_LEN,
        });
    }
    Ok(())
}

/// Validates that the budget is positive.
///
/// This is the only settings rule the wizard itself gates on.
///
/// # Errors
///
/// Returns `DomainError::InvalidBudget` if the budget is zero.
pub const fn validate_budget(settings: &Settings) -> Result<(), DomainError> {
    if settings.budget == 0 {
        return Err(DomainError::InvalidBudget(settings.budget));
    }
    Ok(())
}

/// Advisory checks over a complete rule set.
///
/// Nothing in the settings model enforces these; the presentation boundary reports
/// them. Checks run in a fixed order and the first violation is returned.
///
/// # Errors
///
/// Returns an error if:
/// - The budget is zero
/// - The roster minimum exceeds the roster maximum
/// - The week count is zero
/// - The pick timer is zero
/// - The trade cutoff week falls outside `1..=week_count`
pub fn validate_settings(settings: &Settings) -> Result<(), DomainError> {
    validate_budget(settings)?;

    let roster = settings.roster_size;
    if roster.min > roster.max {
        return Err(DomainError::RosterBoundsInverted {
            min: roster.min,
            max: roster.max,
        });
    }

    if settings.week_count == 0 {
        return Err(DomainError::InvalidWeekCount(settings.week_count));
    }

    if settings.pick_timer_seconds == 0 {
        return Err(DomainError::InvalidPickTimer(settings.pick_timer_seconds));
    }

    if settings.trade_cutoff_week == 0 || settings.trade_cutoff_week > settings.week_count {
        return Err(DomainError::TradeCutoffOutOfRange {
            cutoff: settings.trade_cutoff_week,
            week_count: settings.week_count,
        });
    }

    Ok(())
}

/// Advisory check that the season starts at least one day after the draft.
///
/// Passes when either date is unset.
///
/// # Errors
///
/// Returns `DomainError::SeasonStartTooEarly` if the season start precedes the day
/// after the draft, or `DomainError::DateArithmeticOverflow` on calendar overflow.
pub fn validate_schedule(schedule: &Schedule) -> Result<(), DomainError> {
    let (Some(draft_date), Some(season_start)) = (schedule.draft_date, schedule.season_start_date)
    else {
        return Ok(());
    };

    match schedule.min_season_start()? {
        Some(earliest) if season_start < earliest => Err(DomainError::SeasonStartTooEarly {
            draft_date,
            season_start,
            earliest,
        }),
        _ => Ok(()),
    }
}
