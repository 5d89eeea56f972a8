//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use typeahead::{contracts, Autocomplete, Suggestion};

// Re-export canonical test utilities from typeahead::testing
pub use typeahead::testing::{
    brute_force_ranking, names, session_with, type_query, type_query_banded, CONSOLE_VOCABULARY,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// The four-token vocabulary used by the worked "ren" example.
pub const SCENARIO_TOKENS: &[&str] = &["render", "rendering", "window", "wander"];

/// Write `tokens` one per line into a temp file that lives as long as the handle.
pub fn vocab_file(tokens: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp vocabulary");
    for token in tokens {
        writeln!(file, "{}", token).expect("Failed to write vocabulary");
    }
    file
}

/// Write raw `contents` into a temp file.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Panic with the first violated session invariant, if any.
pub fn assert_session_well_formed(session: &Autocomplete) {
    if let Err(err) = contracts::validate_session(session) {
        panic!(
            "session invariant violated at query {:?}: {}",
            session.query(),
            err
        );
    }
}

/// Sort by (distance, name) so rankings that differ only in tie order compare equal.
pub fn canonical(mut ranking: Vec<Suggestion>) -> Vec<Suggestion> {
    ranking.sort_by(|a, b| (a.distance, &a.name).cmp(&(b.distance, &b.name)));
    ranking
}

/// Distances of a ranking, in order.
pub fn distances(ranking: &[Suggestion]) -> Vec<u32> {
    ranking.iter().map(|s| s.distance).collect()
}
