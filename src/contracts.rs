// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the session's internal invariants.
//!
//! Two layers:
//!
//! 1. `validate_*` functions return an [`InvariantError`] describing the first
//!    violated property. Tests call these directly.
//! 2. `check_*` functions run them only under `debug_assertions`, so they are
//!    zero-cost in release builds and fail loudly in debug builds right after
//!    the mutation that broke something.
//!
//! # Invariants
//!
//! | Contract                 | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `validate_rank_index`    | every id sits in `buckets[distance]` at its slot |
//! | `validate_distances`     | unbanded distances equal from-scratch OSA        |
//! | `validate_bounds`        | `distance <= max(len(token), len(query))`        |

use std::fmt;

use crate::candidate::Candidate;
use crate::fuzzy::osa_distance;
use crate::rank::RankIndex;
use crate::session::Autocomplete;
use crate::types::Distance;

/// A violated session invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Candidate is not placed in any bucket.
    Unplaced { id: usize },
    /// The id's recorded slot does not hold the id in `buckets[distance]`.
    WrongSlot {
        id: usize,
        distance: Distance,
        slot: usize,
    },
    /// A bucket holds an id whose distance is different.
    Misbucketed {
        id: usize,
        bucket: Distance,
        distance: Distance,
    },
    /// Bucket total differs from the pool size (an id is in two buckets or
    /// a stale id survived).
    PlacedCountMismatch { placed: usize, pool: usize },
    /// Engine distance differs from a from-scratch OSA computation.
    DistanceMismatch {
        id: usize,
        engine: Distance,
        expected: Distance,
    },
    /// Distance exceeds `max(len(token), len(query))`.
    OutOfBounds {
        id: usize,
        distance: Distance,
        bound: Distance,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unplaced { id } => write!(f, "candidate {} is not in any bucket", id),
            InvariantError::WrongSlot { id, distance, slot } => write!(
                f,
                "candidate {} not found at buckets[{}][{}]",
                id, distance, slot
            ),
            InvariantError::Misbucketed {
                id,
                bucket,
                distance,
            } => write!(
                f,
                "candidate {} in bucket {} but has distance {}",
                id, bucket, distance
            ),
            InvariantError::PlacedCountMismatch { placed, pool } => {
                write!(f, "{} ids in buckets for {} candidates", placed, pool)
            }
            InvariantError::DistanceMismatch {
                id,
                engine,
                expected,
            } => write!(
                f,
                "candidate {} reports distance {} but OSA is {}",
                id, engine, expected
            ),
            InvariantError::OutOfBounds {
                id,
                distance,
                bound,
            } => write!(
                f,
                "candidate {} distance {} exceeds bound {}",
                id, distance, bound
            ),
        }
    }
}

impl std::error::Error for InvariantError {}

pub(crate) fn validate_ranks(pool: &[Candidate], ranks: &RankIndex) -> Result<(), InvariantError> {
    for (id, candidate) in pool.iter().enumerate() {
        let distance = candidate.distance();
        let slot = ranks.slot(id).ok_or(InvariantError::Unplaced { id })?;
        if ranks.bucket(distance).get(slot) != Some(&id) {
            return Err(InvariantError::WrongSlot { id, distance, slot });
        }
    }

    for bucket in 0..ranks.bucket_count() as Distance {
        for &id in ranks.bucket(bucket) {
            let distance = pool.get(id).map(Candidate::distance);
            if distance != Some(bucket) {
                return Err(InvariantError::Misbucketed {
                    id,
                    bucket,
                    distance: distance.unwrap_or(Distance::MAX),
                });
            }
        }
    }

    let placed = ranks.placed_count();
    if placed != pool.len() {
        return Err(InvariantError::PlacedCountMismatch {
            placed,
            pool: pool.len(),
        });
    }
    Ok(())
}

pub(crate) fn validate_osa(pool: &[Candidate], query: &str) -> Result<(), InvariantError> {
    for (id, candidate) in pool.iter().enumerate() {
        let Some(engine) = candidate.estimate().exact() else {
            continue;
        };
        let expected = osa_distance(candidate.name(), query);
        if engine != expected {
            return Err(InvariantError::DistanceMismatch {
                id,
                engine,
                expected,
            });
        }
    }
    Ok(())
}

/// Every candidate is in exactly the bucket matching its distance.
pub fn validate_rank_index(session: &Autocomplete) -> Result<(), InvariantError> {
    validate_ranks(session.candidates(), session.rank_index())
}

/// Every candidate not degraded by banding reports the true OSA distance.
pub fn validate_distances(session: &Autocomplete) -> Result<(), InvariantError> {
    validate_osa(session.candidates(), session.query())
}

/// Every exact distance lies within `max(len(token), len(query))`.
pub fn validate_bounds(session: &Autocomplete) -> Result<(), InvariantError> {
    let query_len = session.query().chars().count() as Distance;
    for (id, candidate) in session.candidates().iter().enumerate() {
        let Some(distance) = candidate.estimate().exact() else {
            continue;
        };
        let bound = query_len.max(candidate.len() as Distance);
        if distance > bound {
            return Err(InvariantError::OutOfBounds {
                id,
                distance,
                bound,
            });
        }
    }
    Ok(())
}

/// Run all validations.
pub fn validate_session(session: &Autocomplete) -> Result<(), InvariantError> {
    validate_rank_index(session)?;
    validate_distances(session)?;
    validate_bounds(session)
}

/// # Panics (debug builds only)
/// Panics if any candidate is missing from, or misplaced in, the buckets.
#[inline]
pub(crate) fn check_rank_consistent(pool: &[Candidate], ranks: &RankIndex) {
    if cfg!(debug_assertions) {
        if let Err(err) = validate_ranks(pool, ranks) {
            panic!("Contract violation: rank index - {}", err);
        }
    }
}

/// # Panics (debug builds only)
/// Panics if an exact candidate distance disagrees with from-scratch OSA.
#[inline]
pub(crate) fn check_distances_exact(pool: &[Candidate], query: &str) {
    if cfg!(debug_assertions) {
        if let Err(err) = validate_osa(pool, query) {
            panic!("Contract violation: OSA distance - {}", err);
        }
    }
}
