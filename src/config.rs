// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session configuration.
//!
//! Two knobs: how many suggestions to return and an optional default band
//! limit for appends. Both can be supplied as JSON (the CLI's `--config`) and
//! overridden per call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Band, Distance, DEFAULT_SUGGESTION_COUNT};

/// Errors from loading or validating a [`Config`].
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    Parse(serde_json::Error),
    /// `suggestion_count` was zero, which would make every lookup empty.
    ZeroSuggestionCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid config: {}", err),
            ConfigError::ZeroSuggestionCount => {
                write!(f, "suggestion_count must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::ZeroSuggestionCount => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Construction-time settings for an [`Autocomplete`](crate::Autocomplete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Suggestions returned when no per-call count is given.
    pub suggestion_count: usize,
    /// Default band limit for `append`; `None` means unbounded.
    pub band_limit: Option<Distance>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            band_limit: None,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestion_count == 0 {
            return Err(ConfigError::ZeroSuggestionCount);
        }
        Ok(())
    }

    pub fn band(&self) -> Band {
        Band::from(self.band_limit)
    }
}
