// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    INVITE_CODE_ALPHABET, INVITE_CODE_LENGTH, InviteCode, generate_invite_code,
    generate_invite_code_with,
};
use std::collections::HashMap;

#[test]
fn test_generated_codes_use_alphabet_and_length() {
    for _ in 0..1000 {
        let code: InviteCode = generate_invite_code();
        assert_eq!(code.as_str().len(), INVITE_CODE_LENGTH);
        assert!(
            code.as_str()
                .bytes()
                .all(|b| INVITE_CODE_ALPHABET.contains(&b)),
            "unexpected character in {code}"
        );
    }
}

#[test]
fn test_generated_codes_cover_the_alphabet() {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for _ in 0..1000 {
        for c in generate_invite_code().as_str().chars() {
            *counts.entry(c).or_default() += 1;
        }
    }

    // 8000 draws over 32 symbols, 250 expected each.
    assert_eq!(counts.len(), INVITE_CODE_ALPHABET.len());
    assert!(counts.values().all(|n| (150..=350).contains(n)), "{counts:?}");
}

#[test]
fn test_ambiguous_characters_are_excluded() {
    for excluded in [b'I', b'O', b'0', b'1'] {
        assert!(!INVITE_CODE_ALPHABET.contains(&excluded));
    }
}

#[test]
fn test_injected_index_source() {
    let mut index: usize = 0;
    let code: InviteCode = generate_invite_code_with(|_| {
        index += 1;
        index - 1
    });
    assert_eq!(code.as_str(), "ABCDEFGH");

    let wrapped: InviteCode = generate_invite_code_with(|len| len + 31);
    assert_eq!(wrapped.as_str(), "99999999");
}

#[test]
fn test_parse_invite_code() {
    assert!(InviteCode::parse("K7PQ2MXZ").is_some());
    assert!(InviteCode::parse("K7PQ2MX").is_none());
    assert!(InviteCode::parse("K7PQ2MX0").is_none());
    assert!(InviteCode::parse("k7pq2mxz").is_none());
}
