// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod handlers;
mod request_response;
mod service;

#[cfg(test)]
mod tests;

pub use config::{
    API_TIMEOUT_MS_VAR, API_URL_VAR, APP_NAME_VAR, APP_URL_VAR, ConfigError, ENABLE_ANALYTICS_VAR,
    ENABLE_DEBUG_VAR, ServiceConfig,
};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_service_error};
pub use handlers::{
    advisories, apply_command, apply_raw_setting, begin_submission, create_league,
    finish_submission, list_profiles, parse_command, parse_pool_filter, query_catalog, snapshot,
};
pub use request_response::{
    CatalogEntryView, CatalogQuery, CatalogResponse, CommandRequest, GateView, ProfilesResponse,
    RawSettingsInput, ScheduleDerived, SessionSnapshot, SubmitResponse,
};
pub use service::{SIMULATED_LATENCY, SimulatedLeagueService};
