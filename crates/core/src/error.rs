// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::service::ServiceError;
use crate::state::Step;

/// Errors that can occur while submitting a wizard session.
///
/// Ordinary wizard commands never fail; rejected commands leave the session as it
/// was. Only submission reports errors, and every variant leaves the session intact
/// so the caller can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// One or more step gates do not pass.
    IncompleteSession {
        /// Steps whose gate fails, in wizard order.
        failing_steps: Vec<Step>,
    },
    /// Submission was requested before reaching the review step.
    NotAtReview {
        /// The step the session is on.
        current: Step,
    },
    /// The league for this session has already been created.
    AlreadyCreated,
    /// The league-creation service failed.
    Service(ServiceError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteSession { failing_steps } => {
                let names: Vec<&str> = failing_steps.iter().map(|s| s.title()).collect();
                write!(f, "Incomplete steps: {}", names.join(", "))
            }
            Self::NotAtReview { current } => write!(
                f,
                "League can only be created from the review step, currently on step {}",
                current.number()
            ),
            Self::AlreadyCreated => write!(f, "League has already been created"),
            Self::Service(err) => write!(f, "League creation failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ServiceError> for CoreError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}
