//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::fuzzy::exact_distance;
use crate::session::Autocomplete;
use crate::types::{Band, Suggestion};

/// A console-flavored vocabulary: namespaces, commands and argument names.
pub const CONSOLE_VOCABULARY: &[&str] = &[
    "global",
    "render",
    "rendering",
    "renderer",
    "window",
    "wander",
    "resize",
    "fullscreen",
    "vsync",
    "profiler",
    "profile",
    "shader",
    "shaders",
    "reload",
    "quit",
    "help",
    "history",
    "clear",
    "echo",
    "exec",
    "set",
    "get",
    "width",
    "height",
    "format",
    "frame_count",
    "frame_time",
    "texture",
    "textures",
    "stats",
];

/// Session seeded with `tokens`.
pub fn session_with(tokens: &[&str], suggestion_count: usize) -> Autocomplete {
    Autocomplete::with_tokens(suggestion_count, tokens.iter().copied())
}

/// Type `text` one character at a time, as a user would.
pub fn type_query(session: &mut Autocomplete, text: &str) {
    for c in text.chars() {
        session.append(c);
    }
}

/// Type `text` one character at a time with an explicit band.
pub fn type_query_banded(session: &mut Autocomplete, text: &str, band: Band) {
    for c in text.chars() {
        session.append_banded(c, band);
    }
}

/// Exact distance of every token to `query`, sorted ascending, ties in
/// insertion order. The reference the bucketed scan is checked against.
pub fn brute_force_ranking(tokens: &[&str], query: &str) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = tokens
        .iter()
        .map(|t| Suggestion::new(*t, exact_distance(query, t)))
        .collect();
    ranked.sort_by_key(|s| s.distance);
    ranked
}

/// Names of a ranking, for compact assertions.
pub fn names(ranking: &[Suggestion]) -> Vec<&str> {
    ranking.iter().map(|s| s.name.as_str()).collect()
}
