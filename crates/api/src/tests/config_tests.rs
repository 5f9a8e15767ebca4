// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    API_TIMEOUT_MS_VAR, API_URL_VAR, APP_NAME_VAR, ConfigError, ENABLE_ANALYTICS_VAR,
    ENABLE_DEBUG_VAR, ServiceConfig,
};
use std::collections::HashMap;
use std::time::Duration;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ServiceConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_when_nothing_is_set() {
    let config: ServiceConfig = from_pairs(&[]).unwrap();

    assert_eq!(config, ServiceConfig::default());
    assert_eq!(config.api_url, "http://localhost:3001/api");
    assert_eq!(config.api_timeout, Duration::from_secs(30));
    assert_eq!(config.app_name, "Pokemon Draft League");
    assert_eq!(config.app_url, "http://localhost:5173");
    assert!(!config.enable_analytics);
    assert!(!config.enable_debug);
}

#[test]
fn test_values_are_read_from_lookup() {
    let config: ServiceConfig = from_pairs(&[
        (API_URL_VAR, "https://leagues.example.com/api"),
        (API_TIMEOUT_MS_VAR, "2500"),
        (APP_NAME_VAR, "Draft Night"),
        (ENABLE_ANALYTICS_VAR, "true"),
        (ENABLE_DEBUG_VAR, "1"),
    ])
    .unwrap();

    assert_eq!(config.api_url, "https://leagues.example.com/api");
    assert_eq!(config.api_timeout, Duration::from_millis(2500));
    assert_eq!(config.app_name, "Draft Night");
    assert!(config.enable_analytics);
    assert!(config.enable_debug);
}

#[test]
fn test_unparseable_timeout_falls_back() {
    let config: ServiceConfig = from_pairs(&[(API_TIMEOUT_MS_VAR, "soon")]).unwrap();
    assert_eq!(config.api_timeout, Duration::from_millis(30_000));
}

#[test]
fn test_feature_flags_need_explicit_true() {
    let config: ServiceConfig =
        from_pairs(&[(ENABLE_ANALYTICS_VAR, "yes"), (ENABLE_DEBUG_VAR, "false")]).unwrap();
    assert!(!config.enable_analytics);
    assert!(!config.enable_debug);
}

#[test]
fn test_empty_api_url_is_rejected() {
    let result: Result<ServiceConfig, ConfigError> = from_pairs(&[(API_URL_VAR, "  ")]);
    assert_eq!(
        result,
        Err(ConfigError::Empty {
            variable: API_URL_VAR
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "DRAFT_LEAGUE_API_URL must not be empty"
    );
}
