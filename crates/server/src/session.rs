// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory wizard sessions.
//!
//! Sessions are independent of each other and live only as long as the process.
//! A session nobody has changed for [`SESSION_IDLE_TTL`] is evicted the next time a
//! session is opened.

use draft_league::WizardSession;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a session may go unchanged before it is evicted.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug)]
struct StoredSession {
    session: WizardSession,
    last_activity: Instant,
}

/// All open wizard sessions, keyed by session id.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, StoredSession>,
    submitting: HashSet<String>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_IDLE_TTL)
    }
}

impl SessionStore {
    /// Creates an empty store evicting sessions idle for longer than `idle_ttl`.
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            submitting: HashSet::new(),
            idle_ttl,
        }
    }

    /// Stores a new session under a fresh id and returns the id.
    ///
    /// Idle sessions are evicted first.
    pub fn insert(&mut self, session: WizardSession) -> String {
        self.remove_expired(Instant::now());

        let mut session_id: String = new_session_id();
        while self.sessions.contains_key(&session_id) {
            session_id = new_session_id();
        }
        self.sessions.insert(
            session_id.clone(),
            StoredSession {
                session,
                last_activity: Instant::now(),
            },
        );
        debug!(session_id = %session_id, open = self.sessions.len(), "Opened session");
        session_id
    }

    /// Returns the session stored under `session_id`.
    pub fn get(&self, session_id: &str) -> Option<&WizardSession> {
        self.sessions.get(session_id).map(|stored| &stored.session)
    }

    /// Replaces the stored session and marks it active. Unknown ids are ignored.
    pub fn replace(&mut self, session_id: &str, session: WizardSession) {
        if let Some(stored) = self.sessions.get_mut(session_id) {
            stored.session = session;
            stored.last_activity = Instant::now();
        }
    }

    /// Removes a session, returning it if it existed.
    pub fn remove(&mut self, session_id: &str) -> Option<WizardSession> {
        self.submitting.remove(session_id);
        self.sessions
            .remove(session_id)
            .map(|stored| stored.session)
    }

    /// Evicts sessions idle for longer than the store's TTL as of `now`.
    ///
    /// Sessions with a submission in flight are kept. Returns the number evicted.
    pub fn remove_expired(&mut self, now: Instant) -> usize {
        let before: usize = self.sessions.len();
        let idle_ttl: Duration = self.idle_ttl;
        let submitting: &HashSet<String> = &self.submitting;
        self.sessions.retain(|session_id, stored| {
            submitting.contains(session_id)
                || now.saturating_duration_since(stored.last_activity) <= idle_ttl
        });

        let removed: usize = before - self.sessions.len();
        if removed > 0 {
            info!(removed, open = self.sessions.len(), "Evicted idle sessions");
        }
        removed
    }

    /// Marks a submission as in flight. Returns `false` if one already is.
    pub fn begin_submit(&mut self, session_id: &str) -> bool {
        self.submitting.insert(session_id.to_string())
    }

    /// Returns whether a submission for `session_id` is in flight.
    pub fn is_submitting(&self, session_id: &str) -> bool {
        self.submitting.contains(session_id)
    }

    /// Clears the in-flight marker set by [`Self::begin_submit`].
    pub fn end_submit(&mut self, session_id: &str) {
        self.submitting.remove(session_id);
    }
}

fn new_session_id() -> String {
    format!("session_{:016x}", rand::random::<u64>())
}
