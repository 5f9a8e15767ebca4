// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use draft_league::{CoreError, ServiceError, Step};
use draft_league_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// League creation failed; the session is intact and may be resubmitted.
    SubmissionFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::SubmissionFailed { message } => {
                write!(f, "Failed to create league: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message,
    }
}

fn rule_violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidGeneration(_) => invalid_input("generation", message),
        DomainError::UnknownCategory(_) => invalid_input("category", message),
        DomainError::UnknownFormType(_) => invalid_input("form_type", message),
        DomainError::UnknownPokemonType(_) => invalid_input("type", message),
        DomainError::UnknownDraftOrder(_) => invalid_input("draft_order", message),
        DomainError::UnknownDeadlineDay(_) => invalid_input("weekly_deadline_day", message),
        DomainError::UnknownTradeLimit(_) => invalid_input("trade_limit", message),
        DomainError::InvalidPlayoffTeams(_) => invalid_input("playoff_teams", message),
        DomainError::InvalidTierCap(_) => invalid_input("tier_cap", message),
        DomainError::InvalidLeagueName { .. } => invalid_input("league_name", message),
        DomainError::DateArithmeticOverflow { operation } => invalid_input(
            "date",
            format!("Date arithmetic overflow while {operation}"),
        ),
        DomainError::DateParseError { date_string, error } => invalid_input(
            "date",
            format!("Failed to parse '{date_string}': {error}"),
        ),
        DomainError::InvalidBudget(_) => rule_violation("positive_budget", message),
        DomainError::RosterBoundsInverted { .. } => rule_violation("roster_bounds", message),
        DomainError::InvalidWeekCount(_) => rule_violation("positive_week_count", message),
        DomainError::InvalidPickTimer(_) => rule_violation("positive_pick_timer", message),
        DomainError::TradeCutoffOutOfRange { .. } => {
            rule_violation("trade_cutoff_within_season", message)
        }
        DomainError::SeasonStartTooEarly { .. } => rule_violation("season_after_draft", message),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::IncompleteSession { failing_steps } => ApiError::DomainRuleViolation {
            rule: String::from("complete_session"),
            message: format!(
                "Complete these steps before creating the league: {}",
                failing_steps
                    .iter()
                    .map(|step: &Step| step.title())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ),
        },
        CoreError::NotAtReview { current } => ApiError::DomainRuleViolation {
            rule: String::from("review_step"),
            message: format!(
                "Leagues are created from the review step, session is on step {}",
                current.number()
            ),
        },
        CoreError::AlreadyCreated => ApiError::DomainRuleViolation {
            rule: String::from("single_creation"),
            message: String::from("This league has already been created"),
        },
        CoreError::Service(service_err) => translate_service_error(&service_err),
    }
}

/// Translates a league-service failure into an API error.
#[must_use]
pub fn translate_service_error(err: &ServiceError) -> ApiError {
    ApiError::SubmissionFailed {
        message: err.to_string(),
    }
}
