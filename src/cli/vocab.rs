// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary file loading.
//!
//! Either a JSON array of strings, or plain text with one token per line where
//! blank lines and `#` comments are skipped.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse vocabulary text in either supported format.
pub fn parse_vocabulary(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("vocabulary is not a JSON array of strings");
    }

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Read and parse a vocabulary file.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary {}", path.display()))?;
    parse_vocabulary(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
