// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    ApiError, CommandRequest, ServiceConfig, SimulatedLeagueService, SubmitResponse,
    apply_command, begin_submission, create_league, finish_submission,
};
use draft_league::{LeagueCreated, LeagueRequest, WizardSession};
use draft_league_domain::{Catalog, ProfileStore, ScheduleUpdate};
use std::time::Duration;
use time::macros::date;

pub fn create_test_catalog() -> Catalog {
    Catalog::standard()
}

pub fn create_test_profiles() -> ProfileStore {
    ProfileStore::builtin()
}

pub fn create_test_config() -> ServiceConfig {
    ServiceConfig {
        api_timeout: Duration::from_millis(500),
        app_url: String::from("https://draft.example.com/"),
        ..ServiceConfig::default()
    }
}

pub fn create_fast_service() -> SimulatedLeagueService {
    SimulatedLeagueService::new(&create_test_config()).with_latency(Duration::from_millis(5))
}

/// Runs a submission through begin, create and finish, as the server does.
pub async fn submit(
    session: &WizardSession,
    catalog: &Catalog,
    service: &SimulatedLeagueService,
    config: &ServiceConfig,
) -> Result<(WizardSession, SubmitResponse), ApiError> {
    let request: LeagueRequest = begin_submission(session, catalog)?;
    let created: LeagueCreated = create_league(service, &request).await?;
    finish_submission(session, created, config)
}

pub fn run(session: &WizardSession, requests: Vec<CommandRequest>) -> WizardSession {
    let catalog: Catalog = create_test_catalog();
    let profiles: ProfileStore = create_test_profiles();
    requests.into_iter().fold(session.clone(), |s, r| {
        apply_command(&s, r, &catalog, &profiles).unwrap()
    })
}

/// A session on the review step with every gate passing.
pub fn create_review_session() -> WizardSession {
    let session: WizardSession = WizardSession::new(&create_test_catalog());
    run(
        &session,
        vec![
            CommandRequest::SelectProfile {
                profile_id: String::from("nko"),
            },
            CommandRequest::Advance,
            CommandRequest::SetLeagueName {
                name: String::from("Hoenn Cup"),
            },
            CommandRequest::Advance,
            CommandRequest::Advance,
            CommandRequest::Advance,
            CommandRequest::UpdateSchedule {
                update: ScheduleUpdate::DraftDate(Some(date!(2026 - 06 - 06))),
            },
            CommandRequest::UpdateSchedule {
                update: ScheduleUpdate::SeasonStartDate(Some(date!(2026 - 06 - 13))),
            },
            CommandRequest::Advance,
        ],
    )
}
