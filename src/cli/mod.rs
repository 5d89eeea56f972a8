// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typeahead command-line interface.
//!
//! Four subcommands: `suggest` ranks a vocabulary against one query, `trace`
//! replays a query keystroke by keystroke to show the ranking evolve, `check`
//! is the console's "did you mean" lookup, and `repl` is a line-driven console
//! for poking at a session by hand.

pub mod display;
pub mod vocab;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "typeahead",
    about = "Incremental edit-distance autocomplete over a token vocabulary",
    version
)]
pub struct Cli {
    /// JSON config file ({"suggestion_count": 10, "band_limit": null})
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the vocabulary against a query
    Suggest {
        /// Vocabulary file: one token per line, or a JSON array of strings
        #[arg(long)]
        vocab: PathBuf,

        /// Query text
        query: String,

        /// Number of suggestions (defaults to the configured count)
        #[arg(short = 'k', long)]
        count: Option<usize>,

        /// Band limit applied while typing the query
        #[arg(long)]
        band: Option<u32>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type a query one character at a time, printing the ranking after each
    Trace {
        /// Vocabulary file: one token per line, or a JSON array of strings
        #[arg(long)]
        vocab: PathBuf,

        /// Query text
        query: String,

        /// Number of suggestions (defaults to the configured count)
        #[arg(short = 'k', long)]
        count: Option<usize>,

        /// Band limit applied on each keystroke
        #[arg(long)]
        band: Option<u32>,
    },

    /// Look a token up in the vocabulary, suggesting the closest match if absent
    Check {
        /// Vocabulary file: one token per line, or a JSON array of strings
        #[arg(long)]
        vocab: PathBuf,

        /// Token to look up
        token: String,
    },

    /// Interactive console: type a query per line, or :back, :add, :clear, :tokens, :quit
    Repl {
        /// Vocabulary file: one token per line, or a JSON array of strings
        #[arg(long)]
        vocab: PathBuf,
    },
}
