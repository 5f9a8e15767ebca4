// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service configuration.
//!
//! Configuration is read once and passed explicitly to whatever needs it. There is
//! no process-wide configuration object.

use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Base URL of the league-management API.
pub const API_URL_VAR: &str = "DRAFT_LEAGUE_API_URL";
/// League-creation timeout, in milliseconds.
pub const API_TIMEOUT_MS_VAR: &str = "DRAFT_LEAGUE_API_TIMEOUT_MS";
/// Application display name.
pub const APP_NAME_VAR: &str = "DRAFT_LEAGUE_APP_NAME";
/// Public URL the invite links point at.
pub const APP_URL_VAR: &str = "DRAFT_LEAGUE_APP_URL";
/// `true` or `1` enables analytics.
pub const ENABLE_ANALYTICS_VAR: &str = "DRAFT_LEAGUE_ENABLE_ANALYTICS";
/// `true` or `1` enables debug logging.
pub const ENABLE_DEBUG_VAR: &str = "DRAFT_LEAGUE_ENABLE_DEBUG";

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_APP_NAME: &str = "Pokemon Draft League";
const DEFAULT_APP_URL: &str = "http://localhost:5173";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required value was set to an empty string.
    #[error("{variable} must not be empty")]
    Empty { variable: &'static str },
}

/// Settings for the league service and the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the league-management API.
    pub api_url: String,
    /// Upper bound on a league-creation call.
    pub api_timeout: Duration,
    /// Application display name.
    pub app_name: String,
    /// Public URL of the application.
    pub app_url: String,
    /// Whether analytics are enabled.
    pub enable_analytics: bool,
    /// Whether debug logging is the default.
    pub enable_debug: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            api_timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            app_name: String::from(DEFAULT_APP_NAME),
            app_url: String::from(DEFAULT_APP_URL),
            enable_analytics: false,
            enable_debug: false,
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` if the API URL is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a variable
    /// or `None` when unset.
    ///
    /// Unset variables take their defaults. An unparseable timeout falls back to the
    /// default and is logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` if the API URL is set but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url: String = lookup(API_URL_VAR).unwrap_or_else(|| String::from(DEFAULT_API_URL));
        if api_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                variable: API_URL_VAR,
            });
        }

        let api_timeout_ms: u64 = match lookup(API_TIMEOUT_MS_VAR) {
            None => DEFAULT_API_TIMEOUT_MS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    variable = API_TIMEOUT_MS_VAR,
                    value = %raw,
                    default = DEFAULT_API_TIMEOUT_MS,
                    "Unparseable timeout, using default"
                );
                DEFAULT_API_TIMEOUT_MS
            }),
        };

        Ok(Self {
            api_url,
            api_timeout: Duration::from_millis(api_timeout_ms),
            app_name: lookup(APP_NAME_VAR).unwrap_or_else(|| String::from(DEFAULT_APP_NAME)),
            app_url: lookup(APP_URL_VAR).unwrap_or_else(|| String::from(DEFAULT_APP_URL)),
            enable_analytics: lookup(ENABLE_ANALYTICS_VAR).is_some_and(|v| is_enabled(&v)),
            enable_debug: lookup(ENABLE_DEBUG_VAR).is_some_and(|v| is_enabled(&v)),
        })
    }
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}
