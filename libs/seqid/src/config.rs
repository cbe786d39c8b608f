//! Counter construction parameters.
//!
//! All fields have defaults, so an empty JSON object yields the stock
//! counter (`"-"` seed, 8192 positions, wrapping overflow).

use serde::{Deserialize, Serialize};

use crate::counter::{Counter, Overflow, DEFAULT_INITIAL_UID, DEFAULT_MAXIMUM_UID_LENGTH};
use crate::error::UidError;

/// Settings for building a [`Counter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Seed UID. Empty values are replaced with the default seed on build.
    #[serde(default = "default_initial_uid")]
    pub initial_uid: String,

    /// Number of leading characters that take part in incrementing.
    #[serde(default = "default_maximum_uid_length")]
    pub maximum_uid_length: usize,

    /// Overflow policy.
    #[serde(default)]
    pub overflow: Overflow,
}

fn default_initial_uid() -> String {
    DEFAULT_INITIAL_UID.to_string()
}

fn default_maximum_uid_length() -> usize {
    DEFAULT_MAXIMUM_UID_LENGTH
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_uid: default_initial_uid(),
            maximum_uid_length: default_maximum_uid_length(),
            overflow: Overflow::default(),
        }
    }
}

impl CounterConfig {
    /// Decodes a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, UidError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a counter from this config.
    #[must_use]
    pub fn build(&self) -> Counter {
        Counter::create(Some(&self.initial_uid), Some(self.maximum_uid_length))
            .with_overflow(self.overflow)
    }
}
