// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::gates::submission_blockers;
use crate::service::{LeagueCreated, LeagueRequest, LeagueService, ServiceError};
use crate::state::{SessionStatus, Step, WizardSession};
use draft_league_domain::{Catalog, Profile, Settings};
use tracing::{info, warn};

/// Checks that `session` can be submitted and builds the service request.
///
/// Every submission gate is re-checked, regardless of how the review step was
/// reached.
///
/// # Errors
///
/// Returns an error if:
/// - The league has already been created
/// - The session is not on the review step
/// - Any of the profile, basics, rules or schedule gates fails
pub fn prepare_submission(
    session: &WizardSession,
    catalog: &Catalog,
) -> Result<LeagueRequest, CoreError> {
    if session.is_created() {
        return Err(CoreError::AlreadyCreated);
    }
    if session.step != Step::Review {
        return Err(CoreError::NotAtReview {
            current: session.step,
        });
    }

    let failing_steps: Vec<Step> = submission_blockers(session);
    let (Some(profile), Some(settings), true) = (
        session.profile.as_ref(),
        session.settings.as_ref(),
        failing_steps.is_empty(),
    ) else {
        return Err(CoreError::IncompleteSession { failing_steps });
    };

    Ok(build_request(session, profile, settings, catalog))
}

fn build_request(
    session: &WizardSession,
    profile: &Profile,
    settings: &Settings,
    catalog: &Catalog,
) -> LeagueRequest {
    LeagueRequest {
        league_name: session.league_name.clone(),
        description: session.description.clone(),
        profile_id: profile.id.clone(),
        settings: settings.clone(),
        pool: session
            .pool
            .enabled_ids(catalog)
            .into_iter()
            .map(String::from)
            .collect(),
        schedule: session.schedule,
    }
}

/// Records a successful creation, producing the terminal session.
///
/// # Errors
///
/// Returns `CoreError::AlreadyCreated` if the session was created in the meantime.
pub fn complete_submission(
    session: &WizardSession,
    created: LeagueCreated,
) -> Result<WizardSession, CoreError> {
    if session.is_created() {
        return Err(CoreError::AlreadyCreated);
    }
    let mut next: WizardSession = session.clone();
    next.status = SessionStatus::Created(created.invite_code);
    Ok(next)
}

/// Submits a session to `service`.
///
/// On success the returned session is terminal and carries the invite code. On
/// failure `session` is untouched and the caller may retry.
///
/// # Errors
///
/// Returns an error if the session cannot be submitted (see
/// [`prepare_submission`]) or the service fails.
pub async fn submit<S>(
    session: &WizardSession,
    catalog: &Catalog,
    service: &S,
) -> Result<WizardSession, CoreError>
where
    S: LeagueService + Sync,
{
    let request: LeagueRequest = prepare_submission(session, catalog)?;
    info!(league_name = %request.league_name, pool_size = request.pool.len(), "Submitting league");

    let created: LeagueCreated = service
        .create(&request)
        .await
        .inspect_err(|e: &ServiceError| warn!(error = %e, "League creation failed"))?;

    info!(invite_code = %created.invite_code, "League created");
    complete_submission(session, created)
}
