// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The seam to the external league-management service.

use crate::invite::InviteCode;
use draft_league_domain::{Schedule, Settings};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Everything the league-management service needs to create a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRequest {
    /// Display name of the league.
    pub league_name: String,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Id of the profile the settings started from.
    pub profile_id: String,
    /// The final rule set.
    pub settings: Settings,
    /// Enabled catalog ids in catalog order.
    pub pool: Vec<String>,
    /// Draft and season calendar.
    pub schedule: Schedule,
}

/// A successfully created league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueCreated {
    /// Code other coaches use to join.
    pub invite_code: InviteCode,
}

/// League-creation failures. All of them are retryable from the review step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached.
    #[error("League service is unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer in time.
    #[error("League service did not respond within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The service refused the request.
    #[error("League service rejected the request: {reason}")]
    Rejected { reason: String },
}

/// Creates leagues from finished wizard sessions.
pub trait LeagueService {
    /// Creates the league described by `request`.
    ///
    /// # Errors
    ///
    /// Returns a `ServiceError` if the league could not be created.
    fn create(
        &self,
        request: &LeagueRequest,
    ) -> impl Future<Output = Result<LeagueCreated, ServiceError>> + Send;
}
