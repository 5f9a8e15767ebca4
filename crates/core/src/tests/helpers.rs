// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Command, InviteCode, LeagueCreated, LeagueRequest, LeagueService, ServiceError, Step,
    WizardSession, apply,
};
use draft_league_domain::{Catalog, ProfileStore, ScheduleUpdate};
use std::sync::Mutex;
use time::macros::date;

pub struct Fixture {
    pub catalog: Catalog,
    pub profiles: ProfileStore,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::standard(),
            profiles: ProfileStore::builtin(),
        }
    }

    pub fn session(&self) -> WizardSession {
        WizardSession::new(&self.catalog)
    }

    pub fn run(&self, session: &WizardSession, command: Command) -> WizardSession {
        apply(session, command, &self.catalog, &self.profiles)
    }

    pub fn run_all(&self, session: &WizardSession, commands: Vec<Command>) -> WizardSession {
        commands
            .into_iter()
            .fold(session.clone(), |s, c| self.run(&s, c))
    }

    /// A session that has walked every gate and sits on the review step.
    pub fn completed_session(&self) -> WizardSession {
        let session: WizardSession = self.run_all(
            &self.session(),
            vec![
                Command::SelectProfile {
                    profile_id: String::from("standard"),
                },
                Command::Advance,
                Command::SetLeagueName {
                    name: String::from("Kanto Classic"),
                },
                Command::Advance,
                Command::Advance,
                Command::Advance,
                Command::UpdateSchedule(ScheduleUpdate::DraftDate(Some(date!(2026 - 03 - 01)))),
                Command::UpdateSchedule(ScheduleUpdate::SeasonStartDate(Some(date!(
                    2026 - 03 - 08
                )))),
                Command::Advance,
            ],
        );
        assert_eq!(session.step, Step::Review);
        session
    }
}

/// A league service that answers with a canned result and records requests.
pub struct StubService {
    pub result: Result<LeagueCreated, ServiceError>,
    pub requests: Mutex<Vec<LeagueRequest>>,
}

impl StubService {
    pub fn succeeding(code: &str) -> Self {
        Self {
            result: Ok(LeagueCreated {
                invite_code: InviteCode::parse(code).unwrap(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ServiceError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl LeagueService for StubService {
    async fn create(&self, request: &LeagueRequest) -> Result<LeagueCreated, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}
