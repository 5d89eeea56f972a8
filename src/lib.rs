//! Incremental edit-distance token autocomplete for interactive consoles.
//!
//! As the user types, every vocabulary token tracks its OSA distance to the
//! query one DP row at a time, and sits in a bucket keyed by that distance.
//! Asking for the top K walks the low buckets and re-ranks just those K names
//! by exact Damerau-Levenshtein distance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ candidate.rs │────▶│   rank.rs    │────▶│    session.rs    │
//! │ (incremental │     │  (buckets by │     │  (Autocomplete:  │
//! │  OSA rows)   │     │   distance)  │     │ query + ranking) │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!        │                                           │
//!        ▼                                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  fuzzy/  (osa_distance reference, exact_distance re-rank)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typeahead::Autocomplete;
//!
//! let mut session = Autocomplete::new(3);
//! for token in ["render", "resize", "reload", "quit"] {
//!     session.add_token(token);
//! }
//!
//! session.set_query("rez");
//! session.append('i');
//! assert_eq!(session.suggestions()[0].name, "resize");
//!
//! session.backspace();
//! assert_eq!(session.query(), "rez");
//! ```

// Module declarations
mod candidate;
pub mod config;
pub mod contracts;
mod fuzzy;
pub mod rank;
mod session;
pub mod testing;
mod types;

// Re-exports for public API
pub use candidate::Candidate;
pub use config::{Config, ConfigError};
pub use contracts::InvariantError;
pub use fuzzy::{exact_distance, osa_distance};
pub use rank::RankIndex;
pub use session::Autocomplete;
pub use types::{Band, Distance, Estimate, Suggestion, DEFAULT_SUGGESTION_COUNT};
