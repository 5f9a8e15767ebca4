// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Characters an invite code is drawn from. Excludes `I`, `O`, `0` and `1`.
pub const INVITE_CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every invite code.
pub const INVITE_CODE_LENGTH: usize = 8;

/// A short code other coaches use to join a league.
///
/// Codes are for sharing, not for access control; they are not generated from a
/// cryptographically secure source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteCode(String);

impl InviteCode {
    /// Accepts `code` if it has the right length and uses only the invite alphabet.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let well_formed: bool = code.len() == INVITE_CODE_LENGTH
            && code.bytes().all(|b| INVITE_CODE_ALPHABET.contains(&b));
        well_formed.then(|| Self(code.to_string()))
    }

    /// Returns the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InviteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generates an invite code from the thread-local generator.
#[must_use]
pub fn generate_invite_code() -> InviteCode {
    // 256 is a multiple of the alphabet size, so the reduction is unbiased.
    generate_invite_code_with(|len| usize::from(rand::random::<u8>()) % len)
}

/// Generates an invite code, asking `next_index` for each position.
///
/// `next_index` receives the alphabet length and must return an index below it;
/// out-of-range indices wrap.
pub fn generate_invite_code_with<F>(mut next_index: F) -> InviteCode
where
    F: FnMut(usize) -> usize,
{
    let len: usize = INVITE_CODE_ALPHABET.len();
    let code: String = (0..INVITE_CODE_LENGTH)
        .map(|_| char::from(INVITE_CODE_ALPHABET[next_index(len) % len]))
        .collect();
    InviteCode(code)
}
