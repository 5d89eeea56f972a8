// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment distance, computed from scratch.
//!
//! This is the metric the per-candidate engine maintains incrementally. The
//! recurrence is the same; here it simply runs over the whole query at once.

use crate::types::Distance;

/// OSA distance between `name` and `query`.
///
/// Rows follow the query and columns follow the name, matching the layout of
/// the incremental engine so both walk identical cells.
pub fn osa_distance(name: &str, query: &str) -> Distance {
    let name: Vec<char> = name.chars().collect();
    let n = name.len();

    let mut prev2: Vec<Distance> = vec![0; n + 1];
    let mut prev: Vec<Distance> = (0..=n as Distance).collect();
    let mut curr: Vec<Distance> = vec![0; n + 1];

    let mut prev_char: Option<char> = None;
    for (row, qc) in query.chars().enumerate() {
        let i = row + 1;
        curr[0] = i as Distance;
        for j in 1..=n {
            let cost = Distance::from(name[j - 1] != qc);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && qc == name[j - 2] && prev_char == Some(name[j - 1]) {
                best = best.min(prev2[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
        prev_char = Some(qc);
    }

    prev[n]
}
