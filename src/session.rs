// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The autocomplete session: vocabulary, query, and ranking in one place.
//!
//! Every query mutation fans out to every candidate, and each candidate whose
//! distance changed hops buckets. Suggestions are read off the low buckets and
//! then re-ranked by exact Damerau-Levenshtein distance, which is more
//! expensive per pair than the OSA distance the buckets track but is only
//! paid for the handful of names being returned.
//!
//! # Cost model
//!
//! | Operation          | Cost                                  |
//! |--------------------|---------------------------------------|
//! | `append`           | O(pool * token length)                |
//! | `backspace`        | O(query * pool * token length)        |
//! | `suggestions(k)`   | O(k + buckets) scan, then k exact DPs |
//!
//! A banded `suggestions(k)` also pays one OSA DP per lower-bound candidate
//! the scan passes over.
//!
//! Backspace replays the whole shortened query because only two DP rows are
//! kept per candidate.

use log::{debug, trace};

use crate::candidate::Candidate;
use crate::config::Config;
use crate::contracts;
use crate::fuzzy::{exact_distance, osa_distance};
use crate::rank::RankIndex;
use crate::types::{Band, Distance, Estimate, Suggestion, DEFAULT_SUGGESTION_COUNT};

const PRE_RESERVED_TOKEN_COUNT: usize = 100;

/// Incremental token autocomplete over a caller-supplied vocabulary.
///
/// # Example
///
/// ```
/// use typeahead::Autocomplete;
///
/// let mut session = Autocomplete::new(2);
/// for token in ["render", "rendering", "window", "wander"] {
///     session.add_token(token);
/// }
/// session.append('r');
/// session.append('e');
/// session.append('n');
///
/// let top = session.suggestions();
/// assert_eq!(top[0].name, "render");
/// assert_eq!(top[0].distance, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Autocomplete {
    pool: Vec<Candidate>,
    ranks: RankIndex,
    query: String,
    suggestion_count: usize,
    band: Band,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_COUNT)
    }
}

impl Autocomplete {
    /// Empty session returning `suggestion_count` suggestions by default.
    pub fn new(suggestion_count: usize) -> Self {
        Self {
            pool: Vec::with_capacity(PRE_RESERVED_TOKEN_COUNT),
            ranks: RankIndex::with_capacity(PRE_RESERVED_TOKEN_COUNT),
            query: String::new(),
            suggestion_count,
            band: Band::Unbounded,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut session = Self::new(config.suggestion_count);
        session.band = config.band();
        session
    }

    /// Session pre-loaded with `tokens` in iteration order.
    pub fn with_tokens<I, S>(suggestion_count: usize, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = Self::new(suggestion_count);
        for token in tokens {
            session.add_token(token.as_ref());
        }
        session
    }

    // ------------------------------------------------------------------------
    // Vocabulary
    // ------------------------------------------------------------------------

    /// Register a token. Duplicates are kept as independent candidates.
    ///
    /// The new candidate is caught up with the current query before it is
    /// ranked, so its distance is against what has been typed, not against "".
    pub fn add_token(&mut self, name: &str) {
        let mut candidate = Candidate::new(name);
        let mut prev = None;
        for c in self.query.chars() {
            candidate.update(c, prev, Band::Unbounded);
            prev = Some(c);
        }

        let id = self.pool.len();
        let d = candidate.distance();
        self.pool.push(candidate);
        self.ranks.place(id, d);
        trace!("added token {:?} at distance {}", name, d);
    }

    /// Drop every token, the query, and the buckets.
    pub fn clear_token_pool(&mut self) {
        debug!("clearing token pool ({} tokens)", self.pool.len());
        self.pool.clear();
        self.ranks.reset();
        self.query.clear();
    }

    /// Every registered token, in insertion order.
    pub fn all_tokens(&self) -> Vec<String> {
        self.pool.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    // ------------------------------------------------------------------------
    // Query mutation
    // ------------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query wholesale.
    pub fn set_query(&mut self, text: &str) {
        self.clear_query();
        self.query.reserve(text.len());
        for c in text.chars() {
            self.append(c);
        }
    }

    /// Empty the query and put every candidate back at its length.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.rewind();
        debug!("query cleared");
    }

    /// Append one character using the session's default band.
    pub fn append(&mut self, c: char) {
        self.append_banded(c, self.band);
    }

    /// Append one character, pruning the DP to `band`.
    pub fn append_banded(&mut self, c: char, band: Band) {
        let prev = self.query.chars().next_back();
        self.query.push(c);
        self.advance(c, prev, band);
        trace!("append {:?} -> query {:?}", c, self.query);

        contracts::check_rank_consistent(&self.pool, &self.ranks);
    }

    /// Drop the last query character. No-op on an empty query.
    ///
    /// The rows cannot be rolled back, so every candidate is rewound and the
    /// shortened query is replayed from the start, unbanded.
    pub fn backspace(&mut self) {
        if self.query.pop().is_none() {
            return;
        }
        self.rewind();

        let replay: Vec<char> = self.query.chars().collect();
        let mut prev = None;
        for c in replay {
            self.advance(c, prev, Band::Unbounded);
            prev = Some(c);
        }
        trace!("backspace -> query {:?}", self.query);

        contracts::check_rank_consistent(&self.pool, &self.ranks);
        contracts::check_distances_exact(&self.pool, &self.query);
    }

    /// Reset every candidate and re-place it at its reset distance.
    fn rewind(&mut self) {
        self.ranks.clear();
        for (id, candidate) in self.pool.iter_mut().enumerate() {
            candidate.reset();
            self.ranks.place(id, candidate.distance());
        }
    }

    /// Feed one query character to every candidate and re-bucket it.
    fn advance(&mut self, c: char, prev: Option<char>, band: Band) {
        for (id, candidate) in self.pool.iter_mut().enumerate() {
            let old_d = candidate.distance();
            let new_d = candidate.update(c, prev, band);
            self.ranks.relocate(id, old_d, new_d);
        }
    }

    // ------------------------------------------------------------------------
    // Suggestions
    // ------------------------------------------------------------------------

    pub fn suggestion_count(&self) -> usize {
        self.suggestion_count
    }

    pub fn set_suggestion_count(&mut self, suggestion_count: usize) {
        self.suggestion_count = suggestion_count;
    }

    /// Default band applied by [`append`](Self::append).
    pub fn band(&self) -> Band {
        self.band
    }

    pub fn set_band(&mut self, band: Band) {
        self.band = band;
    }

    /// Top suggestions using the configured count.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions_with_count(self.suggestion_count)
    }

    /// Up to `k` suggestions, closest first by exact distance.
    ///
    /// Buckets are walked upward. A lower-bound candidate is resolved to its
    /// OSA distance when the walk reaches it, and the walk stops once `k`
    /// collected candidates are no further than the bucket being read, so a
    /// bound never takes the place of a closer token. Anything not sitting in a
    /// bucket is picked up by a linear pass so the result is only short when
    /// the pool is. Ties keep the order they were collected in.
    pub fn suggestions_with_count(&self, k: usize) -> Vec<Suggestion> {
        if k == 0 {
            return Vec::new();
        }

        // (OSA distance, id) in collection order
        let mut picked: Vec<(Distance, usize)> = Vec::with_capacity(k.min(self.pool.len()));
        let mut settled = 0;
        'walk: for d in 0..self.ranks.bucket_count() as Distance {
            let bucket = self.ranks.bucket(d);
            if bucket.is_empty() {
                continue;
            }
            settled = picked.iter().filter(|&&(osa, _)| osa <= d).count();
            for &id in bucket {
                let osa = self.resolved_distance(id);
                picked.push((osa, id));
                if osa <= d {
                    settled += 1;
                    if settled == k {
                        break 'walk;
                    }
                }
            }
        }

        if settled < k {
            for id in (0..self.pool.len()).filter(|&id| !self.ranks.is_placed(id)) {
                picked.push((self.resolved_distance(id), id));
            }
        }

        picked.sort_by_key(|&(osa, _)| osa);
        picked.truncate(k);

        let mut ranked: Vec<Suggestion> = picked
            .into_iter()
            .map(|(_, id)| {
                let name = self.pool[id].name();
                Suggestion::new(name, exact_distance(&self.query, name))
            })
            .collect();
        ranked.sort_by_key(|s| s.distance);
        ranked
    }

    /// OSA distance of candidate `id`, recomputed when its rows were banded.
    fn resolved_distance(&self, id: usize) -> Distance {
        let candidate = &self.pool[id];
        match candidate.estimate() {
            Estimate::Exact(d) => d,
            Estimate::LowerBound(_) => osa_distance(&self.query, candidate.name()),
        }
    }

    /// Top suggestions whose exact distance is at most `max_distance`.
    pub fn suggestions_within(&self, max_distance: Distance) -> Vec<Suggestion> {
        let mut ranked = self.suggestions();
        ranked.retain(|s| s.distance <= max_distance);
        ranked
    }

    /// Closest registered token to `requested` by exact distance.
    ///
    /// Scans the whole vocabulary and ignores the session query. A token only
    /// qualifies if it is closer than `requested` is to the empty string, so
    /// nothing is offered for a request that shares nothing with the pool.
    /// The earliest registered token wins ties.
    pub fn most_likely(&self, requested: &str) -> Option<Suggestion> {
        let mut best = requested.chars().count() as Distance;
        let mut found = None;
        for candidate in &self.pool {
            let d = exact_distance(requested, candidate.name());
            if d < best {
                best = d;
                found = Some(candidate.name());
            }
        }
        found.map(|name| Suggestion::new(name, best))
    }

    // ------------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------------

    /// Raw bucketing distance of candidate `id`.
    pub fn distance_of(&self, id: usize) -> Option<Distance> {
        self.pool.get(id).map(Candidate::distance)
    }

    /// Raw distance of candidate `id` with its exactness tag.
    pub fn estimate_of(&self, id: usize) -> Option<Estimate> {
        self.pool.get(id).map(Candidate::estimate)
    }

    /// Read-only view of the buckets.
    pub fn rank_index(&self) -> &RankIndex {
        &self.ranks
    }

    pub(crate) fn candidates(&self) -> &[Candidate] {
        &self.pool
    }
}
