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

mod apply;
mod command;
mod error;
mod filter;
mod gates;
mod invite;
mod pool;
mod service;
mod state;
mod submit;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use filter::{PoolFilter, PoolSummary, StatusFilter, TierCount};
pub use gates::{SUBMISSION_GATES, can_advance, gate_passes, submission_blockers};
pub use invite::{
    INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH, InviteCode, generate_invite_code,
    generate_invite_code_with,
};
pub use pool::PoolSelection;
pub use service::{LeagueCreated, LeagueRequest, LeagueService, ServiceError};
pub use state::{SessionStatus, Step, WizardSession};
pub use submit::{complete_submission, prepare_submission, submit};
