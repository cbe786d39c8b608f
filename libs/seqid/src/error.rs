//! Error types for UID validation and counter configuration.

use thiserror::Error;

/// Errors returned by the strict helpers around the counter.
///
/// Counter operations themselves never fail; these only surface from
/// [`crate::alphabet::validate`] and [`crate::CounterConfig::from_json`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UidError {
    /// The UID string is empty.
    #[error("UID cannot be empty")]
    Empty,

    /// The UID contains a character outside `0-9A-Za-z`.
    #[error("invalid UID character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The counter configuration could not be decoded.
    #[error("invalid counter config: {message}")]
    InvalidConfig { message: String },
}

impl UidError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, UidError::Empty)
    }

    /// Returns true if this error points at a specific character.
    pub fn is_character_error(&self) -> bool {
        matches!(self, UidError::InvalidCharacter { .. })
    }
}

impl From<serde_json::Error> for UidError {
    fn from(err: serde_json::Error) -> Self {
        UidError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
