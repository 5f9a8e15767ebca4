// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::Fixture;
use crate::{Command, Step, WizardSession, can_advance, gate_passes, submission_blockers};
use draft_league_domain::{ScheduleUpdate, SettingsUpdate};
use time::macros::date;

fn at_step(fixture: &Fixture, step: Step) -> WizardSession {
    let mut session: WizardSession = fixture.completed_session();
    session.step = step;
    session
}

// ============================================================================
// Step gates
// ============================================================================

#[test]
fn test_new_session_defaults() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.session();

    assert_eq!(session.step, Step::Profile);
    assert!(session.profile.is_none());
    assert!(session.settings.is_none());
    assert!(session.league_name.is_empty());
    assert_eq!(session.pool.enabled_count(), 49);
    assert!(!session.is_created());
}

#[test]
fn test_advance_without_profile_is_blocked() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.session();

    let next: WizardSession = fixture.run(&session, Command::Advance);

    assert_eq!(next, session);
    assert!(!can_advance(&session));
}

#[test]
fn test_advance_with_profile() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run_all(
        &fixture.session(),
        vec![
            Command::SelectProfile {
                profile_id: String::from("casual"),
            },
            Command::Advance,
        ],
    );

    assert_eq!(session.step, Step::Basics);
}

#[test]
fn test_league_name_gate_boundaries() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = at_step(&fixture, Step::Basics);

    for (name, passes) in [
        (String::from("ab"), false),
        (String::from("abc"), true),
        ("n".repeat(50), true),
        ("n".repeat(51), false),
    ] {
        let named: WizardSession = fixture.run(&session, Command::SetLeagueName { name });
        let next: WizardSession = fixture.run(&named, Command::Advance);
        assert_eq!(next.step == Step::Rules, passes);
        assert_eq!(gate_passes(&named, Step::Basics), passes);
    }
}

#[test]
fn test_rules_gate_requires_positive_budget() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = at_step(&fixture, Step::Rules);

    let broke: WizardSession =
        fixture.run(&session, Command::UpdateSettings(SettingsUpdate::Budget(0)));
    assert_eq!(fixture.run(&broke, Command::Advance).step, Step::Rules);

    let funded: WizardSession =
        fixture.run(&broke, Command::UpdateSettings(SettingsUpdate::Budget(1)));
    assert_eq!(fixture.run(&funded, Command::Advance).step, Step::Pool);
}

#[test]
fn test_rules_gate_requires_settings() {
    let fixture: Fixture = Fixture::new();
    let mut session: WizardSession = at_step(&fixture, Step::Rules);
    session.settings = None;

    assert!(!gate_passes(&session, Step::Rules));
}

#[test]
fn test_pool_gate_always_passes() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run_all(
        &at_step(&fixture, Step::Pool),
        vec![
            Command::BulkToggle {
                ids: fixture.catalog.ids().map(String::from).collect(),
                enabled: false,
            },
            Command::Advance,
        ],
    );

    assert_eq!(session.pool.enabled_count(), 0);
    assert_eq!(session.step, Step::Schedule);
}

#[test]
fn test_schedule_gate_requires_both_dates() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run(
        &at_step(&fixture, Step::Schedule),
        Command::UpdateSchedule(ScheduleUpdate::SeasonStartDate(None)),
    );

    assert_eq!(fixture.run(&session, Command::Advance).step, Step::Schedule);

    let dated: WizardSession = fixture.run(
        &session,
        Command::UpdateSchedule(ScheduleUpdate::SeasonStartDate(Some(date!(2026 - 04 - 01)))),
    );
    assert_eq!(fixture.run(&dated, Command::Advance).step, Step::Review);
}

#[test]
fn test_advance_on_review_is_a_no_op() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.completed_session();

    assert!(!can_advance(&session));
    assert_eq!(fixture.run(&session, Command::Advance), session);
}

// ============================================================================
// Back and jumps
// ============================================================================

#[test]
fn test_back_moves_one_step() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run(&at_step(&fixture, Step::Pool), Command::Back);

    assert_eq!(session.step, Step::Rules);
}

#[test]
fn test_back_on_first_step_is_a_no_op() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.session();

    assert_eq!(fixture.run(&session, Command::Back), session);
}

#[test]
fn test_back_ignores_gates() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run_all(
        &at_step(&fixture, Step::Rules),
        vec![
            Command::SetLeagueName {
                name: String::from("x"),
            },
            Command::Back,
        ],
    );

    assert_eq!(session.step, Step::Basics);
}

#[test]
fn test_go_to_earlier_step_is_unconditional() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run_all(
        &fixture.completed_session(),
        vec![
            Command::SetLeagueName {
                name: String::new(),
            },
            Command::GoToStep { step: 1 },
        ],
    );

    assert_eq!(session.step, Step::Profile);
}

#[test]
fn test_go_to_later_or_invalid_step_is_ignored() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = at_step(&fixture, Step::Rules);

    for step in [3, 4, 6, 0, 7, 255] {
        assert_eq!(fixture.run(&session, Command::GoToStep { step }), session);
    }
}

#[test]
fn test_edit_jump_then_return_to_review() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.run_all(
        &fixture.completed_session(),
        vec![
            Command::GoToStep { step: 2 },
            Command::SetLeagueName {
                name: String::from("Johto Open"),
            },
            Command::Advance,
            Command::Advance,
            Command::Advance,
            Command::Advance,
        ],
    );

    assert_eq!(session.step, Step::Review);
    assert_eq!(session.league_name, "Johto Open");
}

// ============================================================================
// Submission blockers
// ============================================================================

#[test]
fn test_submission_blockers_on_fresh_session() {
    let fixture: Fixture = Fixture::new();
    let session: WizardSession = fixture.session();

    assert_eq!(
        submission_blockers(&session),
        vec![Step::Profile, Step::Basics, Step::Rules, Step::Schedule]
    );
}

#[test]
fn test_no_blockers_on_completed_session() {
    let fixture: Fixture = Fixture::new();
    assert!(submission_blockers(&fixture.completed_session()).is_empty());
}

#[test]
fn test_step_numbering() {
    assert_eq!(Step::ALL.map(Step::number), [1, 2, 3, 4, 5, 6]);
    assert_eq!(Step::Review.next(), None);
    assert_eq!(Step::Profile.previous(), None);
    assert_eq!(Step::from_number(4), Some(Step::Pool));
    assert_eq!(serde_json::to_string(&Step::Rules).unwrap(), "3");
    assert!(serde_json::from_str::<Step>("9").is_err());
}
