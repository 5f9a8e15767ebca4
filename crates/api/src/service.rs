// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ServiceConfig;
use draft_league::{
    LeagueCreated, LeagueRequest, LeagueService, ServiceError, generate_invite_code,
};
use std::time::Duration;
use tracing::{debug, info};

/// Round trip the simulated service pretends to take.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// A stand-in for the league-management API.
///
/// Waits a fixed latency and then creates the league with a fresh invite code. The
/// wait is bounded by the configured API timeout.
#[derive(Debug, Clone)]
pub struct SimulatedLeagueService {
    api_url: String,
    latency: Duration,
    timeout: Duration,
}

impl SimulatedLeagueService {
    /// Creates a service using the standard latency and the configured timeout.
    #[must_use]
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            latency: SIMULATED_LATENCY,
            timeout: config.api_timeout,
        }
    }

    /// Overrides the simulated latency.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl LeagueService for SimulatedLeagueService {
    async fn create(&self, request: &LeagueRequest) -> Result<LeagueCreated, ServiceError> {
        debug!(
            api_url = %self.api_url,
            league_name = %request.league_name,
            "Simulating league creation"
        );

        tokio::time::timeout(self.timeout, tokio::time::sleep(self.latency))
            .await
            .map_err(|_| ServiceError::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            })?;

        let created: LeagueCreated = LeagueCreated {
            invite_code: generate_invite_code(),
        };
        info!(invite_code = %created.invite_code, "Simulated league created");
        Ok(created)
    }
}
