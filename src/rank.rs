// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bucketed ranking: candidate ids grouped by their current distance.
//!
//! `buckets[d]` holds every candidate whose distance is `d`. A keystroke moves
//! each candidate by at most a few buckets, and a move is a swap-remove plus a
//! push, so re-ranking the whole pool is O(pool) per keystroke with no sorting.
//! Reading the top K is a walk from bucket 0 upward.
//!
//! Each id's position inside its bucket is kept in a back-pointer table so a
//! removal never has to search the bucket.

use crate::types::Distance;

/// Distance-indexed buckets of candidate ids.
#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    buckets: Vec<Vec<usize>>,
    /// `slots[id]` is the id's position in its bucket, `None` when unplaced.
    slots: Vec<Option<usize>>,
}

impl RankIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `candidates` ids.
    pub fn with_capacity(candidates: usize) -> Self {
        Self {
            buckets: Vec::new(),
            slots: Vec::with_capacity(candidates),
        }
    }

    /// Append `id` to `buckets[d]`, growing the table if needed.
    ///
    /// The id must not currently be placed.
    pub fn place(&mut self, id: usize, d: Distance) {
        let d = d as usize;
        if d >= self.buckets.len() {
            self.buckets.resize_with(d + 1, Vec::new);
        }
        if id >= self.slots.len() {
            self.slots.resize(id + 1, None);
        }
        debug_assert!(self.slots[id].is_none(), "id {} placed twice", id);

        let bucket = &mut self.buckets[d];
        bucket.push(id);
        self.slots[id] = Some(bucket.len() - 1);
    }

    /// Move `id` from `buckets[old_d]` to `buckets[new_d]`.
    ///
    /// An unplaced id is simply placed at `new_d`.
    pub fn relocate(&mut self, id: usize, old_d: Distance, new_d: Distance) {
        if !self.is_placed(id) {
            self.place(id, new_d);
            return;
        }
        if old_d == new_d {
            return;
        }
        self.remove(id, old_d);
        self.place(id, new_d);
    }

    /// Swap-remove `id` from `buckets[d]`, repointing whichever id took its slot.
    fn remove(&mut self, id: usize, d: Distance) {
        let Some(slot) = self.slots.get_mut(id).and_then(Option::take) else {
            return;
        };
        let Some(bucket) = self.buckets.get_mut(d as usize) else {
            return;
        };
        debug_assert_eq!(bucket.get(slot), Some(&id), "id {} not at its slot", id);

        bucket.swap_remove(slot);
        if let Some(&moved) = bucket.get(slot) {
            self.slots[moved] = Some(slot);
        }
    }

    /// Ids in ascending-distance order, at most `limit` of them.
    ///
    /// Within a bucket ids come out in bucket order, which depends on the
    /// history of moves. The iterator borrows the index, so it has to be
    /// dropped before the next mutation.
    pub fn scan_ascending(&self, limit: usize) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().flatten().copied().take(limit)
    }

    /// Empty every bucket and mark every id unplaced.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.slots.fill(None);
    }

    /// Forget all ids (the token pool was dropped).
    pub fn reset(&mut self) {
        self.buckets.clear();
        self.slots.clear();
    }

    /// Ids currently at distance `d`.
    pub fn bucket(&self, d: Distance) -> &[usize] {
        self.buckets.get(d as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Size of the bucket table (one past the largest distance ever placed
    /// since the last clear).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn slot(&self, id: usize) -> Option<usize> {
        self.slots.get(id).copied().flatten()
    }

    pub fn is_placed(&self, id: usize) -> bool {
        self.slot(id).is_some()
    }

    /// Total number of ids across all buckets.
    pub fn placed_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
