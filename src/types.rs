// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core value types shared by the engine, the rank index, and the CLI.

use serde::{Deserialize, Serialize};

/// Edit distance between a token and the query, in characters.
///
/// `u32` so that tokens and queries well past 16-bit lengths cannot overflow
/// the DP arithmetic.
pub type Distance = u32;

/// Default number of suggestions a session returns.
pub const DEFAULT_SUGGESTION_COUNT: usize = 10;

/// How far the incremental DP is allowed to look on an append.
///
/// `Limit(tau)` restricts each row to the diagonal band `|i - j| <= tau` and
/// lets candidates further than `tau` from the query stop doing work. Banding
/// only affects the internal distance used for bucketing: a suggestion read
/// resolves every lower bound it reaches before cutting the top K, and the
/// returned distances are always exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    #[default]
    Unbounded,
    Limit(Distance),
}

impl Band {
    /// The band limit, if any.
    pub fn limit(self) -> Option<Distance> {
        match self {
            Band::Unbounded => None,
            Band::Limit(tau) => Some(tau),
        }
    }
}

impl From<Option<Distance>> for Band {
    fn from(limit: Option<Distance>) -> Self {
        limit.map_or(Band::Unbounded, Band::Limit)
    }
}

/// Internal distance reported by a candidate's DP rows.
///
/// Banded updates leave cells outside the band as placeholders, so the value
/// they produce is only guaranteed to be a lower bound on the true OSA
/// distance. The tag keeps that value from being mistaken for an exact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimate {
    /// Rows were computed in full; the value is the OSA distance.
    Exact(Distance),
    /// Some row was pruned by a band; the value never exceeds the OSA distance.
    LowerBound(Distance),
}

impl Estimate {
    /// The raw value, regardless of exactness. Used for bucketing only.
    pub fn value(self) -> Distance {
        match self {
            Estimate::Exact(d) | Estimate::LowerBound(d) => d,
        }
    }

    /// The value if it is exact.
    pub fn exact(self) -> Option<Distance> {
        match self {
            Estimate::Exact(d) => Some(d),
            Estimate::LowerBound(_) => None,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Estimate::Exact(_))
    }
}

/// A ranked suggestion: token text plus its exact Damerau-Levenshtein
/// distance to the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub distance: Distance,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, distance: Distance) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

impl From<(&str, Distance)> for Suggestion {
    fn from((name, distance): (&str, Distance)) -> Self {
        Self::new(name, distance)
    }
}
