// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-token incremental OSA distance.
//!
//! Each vocabulary token keeps the last two completed DP rows of the OSA
//! recurrence against the query typed so far, plus a scratch row. Appending a
//! character computes exactly one new row, so a keystroke costs
//! O(len(token)) per token instead of O(len(token) * len(query)).
//!
//! Rows index the query, columns index the token:
//!
//! ```text
//!            ""  r  e  n  d  e  r      <- token columns j
//!   prev2    ..                        row i - 2 (transpositions)
//!   prev     ..                        row i - 1
//!   curr     i  .. .. .. .. .. ..      row i (being filled)
//! ```
//!
//! `prev[0]` always equals the number of query characters consumed, which is
//! how an update knows its row index without carrying the query around.

use crate::types::{Band, Distance, Estimate};

/// One vocabulary token and its DP state against the current query.
#[derive(Debug, Clone)]
pub struct Candidate {
    name: String,
    chars: Vec<char>,
    prev2: Vec<Distance>,
    prev: Vec<Distance>,
    curr: Vec<Distance>,
    /// Minimum of `prev`, used to skip rows that cannot get back into a band.
    row_min: Distance,
    estimate: Estimate,
}

impl Candidate {
    /// Create a candidate positioned at the empty query.
    pub fn new(name: &str) -> Self {
        let chars: Vec<char> = name.chars().collect();
        let width = chars.len() + 1;
        let mut candidate = Self {
            name: name.to_string(),
            chars,
            prev2: vec![0; width],
            prev: vec![0; width],
            curr: vec![0; width],
            row_min: 0,
            estimate: Estimate::Exact(0),
        };
        candidate.reset();
        candidate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of query characters folded into the rows so far.
    pub fn query_len(&self) -> usize {
        self.prev[0] as usize
    }

    /// Raw distance used for bucketing.
    pub fn distance(&self) -> Distance {
        self.estimate.value()
    }

    /// Distance together with whether banding made it inexact.
    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    /// Rewind to the empty query.
    pub fn reset(&mut self) {
        let n = self.chars.len();
        self.prev2.fill(0);
        self.curr.fill(0);
        for (j, cell) in self.prev.iter_mut().enumerate() {
            *cell = j as Distance;
        }
        self.row_min = 0;
        self.estimate = Estimate::Exact(n as Distance);
    }

    /// Fold one more query character into the rows and return the new distance.
    ///
    /// `last` is the character just appended and `prev_char` the one before it
    /// (`None` for a one-character query). With `Band::Limit(tau)` only the
    /// columns within `tau` of the diagonal are evaluated and the rest hold
    /// `tau + 1`; once the previous row is entirely beyond `tau` the recurrence
    /// is skipped and the row is filled with `tau + 1` outright.
    pub fn update(&mut self, last: char, prev_char: Option<char>, band: Band) -> Distance {
        let n = self.chars.len();
        let i = self.prev[0] + 1;
        self.curr[0] = i;

        let (lo, hi, outside) = match band {
            Band::Unbounded => (1, n, 0),
            Band::Limit(tau) => {
                let lo = (i.saturating_sub(tau) as usize).max(1);
                let hi = (i.saturating_add(tau) as usize).min(n);
                (lo, hi, tau.saturating_add(1))
            }
        };
        let pruned = match band {
            Band::Unbounded => false,
            Band::Limit(_) => lo > 1 || hi < n,
        };
        self.curr[1..].fill(outside);

        if let Band::Limit(tau) = band {
            if self.row_min > tau {
                // Every cell of the new row is at least row_min > tau
                let distance = self.curr[n];
                self.row_min = outside;
                self.estimate = Estimate::LowerBound(distance);
                self.rotate_rows();
                return distance;
            }
        }

        let mut row_min = self.curr[0];
        for j in lo..=hi {
            let deletion = self.prev[j] + 1;
            let insertion = self.curr[j - 1] + 1;
            let substitution = self.prev[j - 1] + Distance::from(self.chars[j - 1] != last);
            let mut best = deletion.min(insertion).min(substitution);

            if i > 1 && j > 1 && last == self.chars[j - 2] && prev_char == Some(self.chars[j - 1])
            {
                best = best.min(self.prev2[j - 2] + 1);
            }

            self.curr[j] = best;
            row_min = row_min.min(best);
        }
        if pruned {
            row_min = row_min.min(outside);
        }

        let distance = self.curr[n];
        self.row_min = row_min;
        self.estimate = if pruned || !self.estimate.is_exact() {
            Estimate::LowerBound(distance)
        } else {
            Estimate::Exact(distance)
        };
        self.rotate_rows();
        distance
    }

    /// `prev2 <- prev`, `prev <- curr`; the old `prev2` becomes scratch.
    fn rotate_rows(&mut self) {
        std::mem::swap(&mut self.prev2, &mut self.prev);
        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}
