// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unrestricted Damerau-Levenshtein distance.
//!
//! Unlike OSA, a transposed pair may be edited again afterwards, so
//! `"ca" -> "abc"` costs 2 (transpose, then insert) instead of 3. The classical
//! algorithm needs the row where each symbol last appeared in `a`, which is a
//! 256-entry array for bytes and a hash map for `char`.

use std::collections::HashMap;

use crate::types::Distance;

/// Exact Damerau-Levenshtein distance between `a` and `b`.
///
/// Uses the `(n + 2) x (m + 2)` table with a sentinel border of `n + m`
/// (larger than any reachable distance) so transpositions referencing a
/// symbol that never appeared fall back to the border and never win.
///
/// # Example
///
/// ```
/// use typeahead::exact_distance;
///
/// assert_eq!(exact_distance("ca", "abc"), 2);
/// assert_eq!(exact_distance("", "abc"), 3);
/// ```
pub fn exact_distance(a: &str, b: &str) -> Distance {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = a.len();
    let m = b.len();

    if n == 0 {
        return m as Distance;
    }
    if m == 0 {
        return n as Distance;
    }

    let width = m + 2;
    let max_dist = n + m;
    let mut d = vec![0usize; (n + 2) * width];

    d[0] = max_dist;
    for i in 0..=n {
        d[(i + 1) * width] = max_dist;
        d[(i + 1) * width + 1] = i;
    }
    for j in 0..=m {
        d[j + 1] = max_dist;
        d[width + j + 1] = j;
    }

    // Last row (1-based) of `a` in which each symbol was seen
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=n {
        let ca = a[i - 1];
        // Last column (1-based) in this row where a[i - 1] matched b
        let mut last_match_col = 0;

        for j in 1..=m {
            let cb = b[j - 1];
            let k = last_row.get(&cb).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = usize::from(ca != cb);
            if cost == 0 {
                last_match_col = j;
            }

            let substitution = d[i * width + j] + cost;
            let deletion = d[i * width + j + 1] + 1;
            let insertion = d[(i + 1) * width + j] + 1;
            let transposition = d[k * width + l] + (i - k - 1) + 1 + (j - l - 1);

            d[(i + 1) * width + j + 1] = substitution
                .min(deletion)
                .min(insertion)
                .min(transposition);
        }

        last_row.insert(ca, i);
    }

    d[(n + 1) * width + m + 1] as Distance
}
