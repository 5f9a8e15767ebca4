// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DeadlineDay, DomainError, PlayoffTeams, Schedule, ScheduleUpdate, parse_date, parse_time};
use time::Date;
use time::macros::{date, time};

fn dated(draft: Date, season: Date) -> Schedule {
    Schedule::default()
        .apply(ScheduleUpdate::DraftDate(Some(draft)))
        .apply(ScheduleUpdate::SeasonStartDate(Some(season)))
}

#[test]
fn test_default_schedule() {
    let schedule: Schedule = Schedule::default();

    assert!(schedule.draft_date.is_none());
    assert!(schedule.season_start_date.is_none());
    assert_eq!(schedule.draft_time, time!(19:00));
    assert_eq!(schedule.weekly_deadline_day, DeadlineDay::Sunday);
    assert_eq!(schedule.weekly_deadline_time, time!(23:59));
    assert!(schedule.playoffs_enabled);
    assert_eq!(schedule.playoff_teams, PlayoffTeams::Six);
    assert!(!schedule.has_required_dates());
}

#[test]
fn test_apply_is_field_level() {
    let schedule: Schedule = Schedule::default()
        .apply(ScheduleUpdate::DraftDate(Some(date!(2026 - 03 - 01))))
        .apply(ScheduleUpdate::PlayoffTeams(PlayoffTeams::Eight));

    assert_eq!(schedule.draft_date, Some(date!(2026 - 03 - 01)));
    assert_eq!(schedule.playoff_teams, PlayoffTeams::Eight);
    assert_eq!(schedule.draft_time, time!(19:00));
    assert!(!schedule.has_required_dates());
}

#[test]
fn test_clearing_a_date() {
    let schedule: Schedule = dated(date!(2026 - 03 - 01), date!(2026 - 03 - 08));
    assert!(schedule.has_required_dates());

    let cleared: Schedule = schedule.apply(ScheduleUpdate::SeasonStartDate(None));
    assert!(!cleared.has_required_dates());
}

#[test]
fn test_min_season_start_is_day_after_draft() {
    let schedule: Schedule = Schedule::default()
        .apply(ScheduleUpdate::DraftDate(Some(date!(2026 - 02 - 28))));
    assert_eq!(
        schedule.min_season_start().unwrap(),
        Some(date!(2026 - 03 - 01))
    );
    assert_eq!(Schedule::default().min_season_start().unwrap(), None);
}

#[test]
fn test_min_season_start_overflow() {
    let schedule: Schedule =
        Schedule::default().apply(ScheduleUpdate::DraftDate(Some(Date::MAX)));
    let result: Result<Option<Date>, DomainError> = schedule.min_season_start();
    assert!(matches!(
        result,
        Err(DomainError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_week_start_and_season_end() {
    let schedule: Schedule = dated(date!(2026 - 03 - 01), date!(2026 - 03 - 08));

    assert_eq!(schedule.week_start(1).unwrap(), Some(date!(2026 - 03 - 08)));
    assert_eq!(schedule.week_start(3).unwrap(), Some(date!(2026 - 03 - 22)));
    assert_eq!(schedule.week_start(0).unwrap(), None);
    assert_eq!(
        schedule.season_end_date(10).unwrap(),
        Some(date!(2026 - 05 - 17))
    );
    assert_eq!(Schedule::default().season_end_date(10).unwrap(), None);
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2026-04-15").unwrap(), Some(date!(2026 - 04 - 15)));
    assert_eq!(parse_date("").unwrap(), None);
    assert_eq!(parse_date("   ").unwrap(), None);
    assert!(matches!(
        parse_date("2026-02-30"),
        Err(DomainError::DateParseError { .. })
    ));
    assert!(matches!(
        parse_date("04/15/2026"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_parse_time() {
    assert_eq!(parse_time("19:00").unwrap(), time!(19:00));
    assert_eq!(parse_time(" 07:30 ").unwrap(), time!(07:30));
    assert!(parse_time("25:00").is_err());
    assert!(parse_time("").is_err());
}

#[test]
fn test_schedule_wire_format() {
    let schedule: Schedule = dated(date!(2026 - 03 - 01), date!(2026 - 03 - 08));
    let json: serde_json::Value = serde_json::to_value(schedule).unwrap();

    assert_eq!(json["draft_date"], "2026-03-01");
    assert_eq!(json["season_start_date"], "2026-03-08");
    assert_eq!(json["draft_time"], "19:00");
    assert_eq!(json["weekly_deadline_day"], "sunday");
    assert_eq!(json["playoff_teams"], 6);

    let unset: serde_json::Value = serde_json::to_value(Schedule::default()).unwrap();
    assert!(unset["draft_date"].is_null());
}

#[test]
fn test_schedule_update_wire_format() {
    let update: ScheduleUpdate =
        serde_json::from_str(r#"{"field":"draft_date","value":"2026-05-02"}"#).unwrap();
    assert_eq!(
        update,
        ScheduleUpdate::DraftDate(Some(date!(2026 - 05 - 02)))
    );

    let cleared: ScheduleUpdate =
        serde_json::from_str(r#"{"field":"season_start_date","value":null}"#).unwrap();
    assert_eq!(cleared, ScheduleUpdate::SeasonStartDate(None));

    let day: ScheduleUpdate =
        serde_json::from_str(r#"{"field":"weekly_deadline_day","value":"friday"}"#).unwrap();
    assert_eq!(day, ScheduleUpdate::WeeklyDeadlineDay(DeadlineDay::Friday));
}
