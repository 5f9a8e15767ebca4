// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step gates: the conditions for leaving a step forward.

use crate::state::{Step, WizardSession};
use draft_league_domain::{validate_budget, validate_league_name};

/// Steps whose gates are re-checked on submission.
pub const SUBMISSION_GATES: [Step; 4] = [Step::Profile, Step::Basics, Step::Rules, Step::Schedule];

/// Returns whether the session may move forward from `step`.
///
/// The review step has no successor, so its gate never passes.
#[must_use]
pub fn gate_passes(session: &WizardSession, step: Step) -> bool {
    match step {
        Step::Profile => session.profile.is_some(),
        Step::Basics => validate_league_name(&session.league_name).is_ok(),
        Step::Rules => session
            .settings
            .as_ref()
            .is_some_and(|settings| validate_budget(settings).is_ok()),
        Step::Pool => true,
        Step::Schedule => session.schedule.has_required_dates(),
        Step::Review => false,
    }
}

/// Returns whether [`crate::Command::Advance`] would move the session forward.
#[must_use]
pub fn can_advance(session: &WizardSession) -> bool {
    !session.is_created() && gate_passes(session, session.step)
}

/// Gates that currently block submission, in wizard order.
#[must_use]
pub fn submission_blockers(session: &WizardSession) -> Vec<Step> {
    SUBMISSION_GATES
        .into_iter()
        .filter(|step| !gate_passes(session, *step))
        .collect()
}
