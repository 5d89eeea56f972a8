// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stateless edit distances: typo tolerance for one-off comparisons.
//!
//! Two metrics live here. `exact_distance` is unrestricted Damerau-Levenshtein,
//! the metric suggestions are ranked by. `osa_distance` is the restricted
//! variant (optimal string alignment) that the incremental engine tracks per
//! keystroke; it is computed from scratch here so the engine has something to
//! agree with.
//!
//! Both operate on Unicode scalar values, not bytes.

mod damerau;
mod osa;

pub use damerau::exact_distance;
pub use osa::osa_distance;
