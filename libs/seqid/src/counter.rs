//! The UID counter and the capability trait it implements.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alphabet::{increment_char, ZERO};
use crate::config::CounterConfig;

/// Seed used when no UID (or an empty one) is supplied.
pub const DEFAULT_INITIAL_UID: &str = "-";

/// Default number of leading characters that take part in incrementing.
pub const DEFAULT_MAXIMUM_UID_LENGTH: usize = 8192;

/// What happens when a carry runs past the last character of the UID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Drop the carry. The UID keeps its width and wraps toward `0...`.
    #[default]
    Wrap,

    /// Append a `'0'` position, as long as the maximum length allows it.
    Extend,
}

/// Capability interface for anything that hands out sequential UIDs.
pub trait UidGenerator {
    /// Returns the last generated (or last set) UID.
    fn last(&self) -> &str;

    /// Overwrites the last UID.
    ///
    /// `None` and `Some("")` reset the generator to [`DEFAULT_INITIAL_UID`].
    /// Any other string is stored verbatim, alphabet or not.
    fn set_last(&mut self, uid: Option<&str>);

    /// Advances by one step and returns the new UID.
    fn generate(&mut self) -> &str;
}

/// Stateful base-62 string counter.
///
/// The UID is treated as a little-endian number: position 0 is the least
/// significant digit and carries move toward the end of the string. Only
/// the first `maximum_uid_length` characters are ever touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    uid: String,
    maximum_uid_length: usize,
    overflow: Overflow,
}

impl Counter {
    /// Creates a counter with the default seed and length bound.
    #[must_use]
    pub fn new() -> Self {
        Self::create(None, None)
    }

    /// Creates a counter from an optional seed and an optional length bound.
    #[must_use]
    pub fn create(initial_uid: Option<&str>, maximum_uid_length: Option<usize>) -> Self {
        Self {
            uid: normalize(initial_uid),
            maximum_uid_length: maximum_uid_length.unwrap_or(DEFAULT_MAXIMUM_UID_LENGTH),
            overflow: Overflow::default(),
        }
    }

    /// Sets the overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Returns the length bound.
    #[must_use]
    pub const fn maximum_uid_length(&self) -> usize {
        self.maximum_uid_length
    }

    /// Returns the overflow policy.
    #[must_use]
    pub const fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Captures the current state as a config that rebuilds an equal counter.
    #[must_use]
    pub fn config(&self) -> CounterConfig {
        CounterConfig {
            initial_uid: self.uid.clone(),
            maximum_uid_length: self.maximum_uid_length,
            overflow: self.overflow,
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl UidGenerator for Counter {
    fn last(&self) -> &str {
        &self.uid
    }

    fn set_last(&mut self, uid: Option<&str>) {
        self.uid = normalize(uid);
    }

    fn generate(&mut self) -> &str {
        increment(&mut self.uid, self.maximum_uid_length, self.overflow);
        trace!(uid = %self.uid, "generated UID");
        &self.uid
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uid)
    }
}

fn normalize(uid: Option<&str>) -> String {
    match uid {
        Some(uid) if !uid.is_empty() => uid.to_string(),
        _ => {
            debug!(seed = DEFAULT_INITIAL_UID, "empty UID replaced with default seed");
            DEFAULT_INITIAL_UID.to_string()
        }
    }
}

/// Increments `uid` in place, scanning at most `maximum_uid_length` chars.
fn increment(uid: &mut String, maximum_uid_length: usize, overflow: Overflow) {
    let mut offset = 0;

    for position in 0..maximum_uid_length {
        let current = uid[offset..].chars().next();
        let Some(current) = current else {
            match overflow {
                Overflow::Wrap => {
                    debug!(width = position, "UID carry dropped at end of value");
                }
                Overflow::Extend => {
                    uid.push(ZERO);
                    debug!(width = position + 1, "UID extended by one position");
                }
            }
            return;
        };

        let step = increment_char(current);
        let mut buf = [0u8; 4];
        uid.replace_range(
            offset..offset + current.len_utf8(),
            step.character.encode_utf8(&mut buf),
        );

        if !step.carry {
            return;
        }
        offset += step.character.len_utf8();
    }

    if maximum_uid_length > 0 {
        debug!(
            width = maximum_uid_length,
            "UID carry dropped at maximum length"
        );
    }
}
