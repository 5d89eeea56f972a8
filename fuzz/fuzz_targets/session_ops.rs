// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for session edit sequences.
//!
//! Drives an [`Autocomplete`] through arbitrary appends, banded appends,
//! backspaces and vocabulary changes, and checks after every step that the
//! buckets, distances and suggestion list are all still consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead::{contracts, exact_distance, Autocomplete, Band};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(char),
    AppendBanded(char, u8),
    Backspace,
    ClearQuery,
    AddToken(String),
    ClearPool,
    Suggest(u8),
}

#[derive(Debug, Arbitrary)]
struct SessionInput {
    tokens: Vec<String>,
    ops: Vec<Op>,
}

fuzz_target!(|input: SessionInput| {
    // Cap sizes to avoid timeouts
    if input.tokens.len() > 64 || input.ops.len() > 256 {
        return;
    }
    if input.tokens.iter().any(|t| t.chars().count() > 32) {
        return;
    }

    let mut session = Autocomplete::with_tokens(8, &input.tokens);

    for op in &input.ops {
        match op {
            Op::Append(c) => {
                if session.query().chars().count() >= 32 {
                    continue;
                }
                session.append(*c);
            }
            Op::AppendBanded(c, tau) => {
                if session.query().chars().count() >= 32 {
                    continue;
                }
                session.append_banded(*c, Band::Limit(u32::from(*tau % 8)));
            }
            Op::Backspace => session.backspace(),
            Op::ClearQuery => session.clear_query(),
            Op::AddToken(token) => {
                if token.chars().count() > 32 || session.len() >= 64 {
                    continue;
                }
                session.add_token(token);
            }
            Op::ClearPool => session.clear_token_pool(),
            Op::Suggest(k) => {
                let k = usize::from(*k % 16);
                let ranking = session.suggestions_with_count(k);

                // INVARIANT 1: Result size is min(k, pool)
                assert_eq!(ranking.len(), k.min(session.len()));

                // INVARIANT 2: Sorted by exact distance, recomputed on the spot
                for s in &ranking {
                    assert_eq!(s.distance, exact_distance(session.query(), &s.name));
                }
                assert!(ranking.windows(2).all(|w| w[0].distance <= w[1].distance));
            }
        }

        // INVARIANT 3: Buckets and exact distances stay consistent
        if let Err(err) = contracts::validate_session(&session) {
            panic!("invariant violated after {:?}: {}", op, err);
        }
    }
});
