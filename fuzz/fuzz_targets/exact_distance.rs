// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the exact re-rank distance.
//!
//! Damerau-Levenshtein must be a metric-like function that never exceeds the
//! OSA distance used for bucketing, for any pair of UTF-8 strings.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typeahead::{exact_distance, osa_distance};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(64).collect();
    let b: String = input.b.chars().take(64).collect();

    let exact = exact_distance(&a, &b);
    let osa = osa_distance(&a, &b);
    let (la, lb) = (a.chars().count() as u32, b.chars().count() as u32);

    // INVARIANT 1: Identity
    assert_eq!(exact == 0, a == b);

    // INVARIANT 2: Symmetry
    assert_eq!(exact, exact_distance(&b, &a));

    // INVARIANT 3: Bounded by the length difference and the longer length
    assert!(la.abs_diff(lb) <= exact);
    assert!(exact <= la.max(lb));

    // INVARIANT 4: Unrestricted transpositions can only help
    assert!(exact <= osa, "DL {} > OSA {} for {:?} / {:?}", exact, osa, a, b);
});
