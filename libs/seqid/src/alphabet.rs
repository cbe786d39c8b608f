//! The base-62 UID alphabet and the per-character increment step.
//!
//! Digits are ordered by character code: `'0'..='9' < 'A'..='Z' < 'a'..='z'`.

use crate::error::UidError;

/// All 62 alphabet characters in increment order.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Character written for a position that wraps or cannot be incremented.
pub const ZERO: char = '0';

const NINE_NEXT: u32 = '9' as u32 + 1;
const UPPER_Z_NEXT: u32 = 'Z' as u32 + 1;
const LOWER_Z_NEXT: u32 = 'z' as u32 + 1;

/// Result of incrementing a single UID position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharIncrement {
    /// Character to write at the position.
    pub character: char,

    /// Whether the next position must be incremented too.
    pub carry: bool,
}

/// Returns true if `code` is the code point of an alphabet character.
#[must_use]
pub fn is_valid_code(code: u32) -> bool {
    (48..=57).contains(&code) || (65..=90).contains(&code) || (97..=122).contains(&code)
}

/// Returns true if `c` belongs to the alphabet.
#[must_use]
pub fn is_alphabet_char(c: char) -> bool {
    is_valid_code(c as u32)
}

/// Increments one character.
///
/// `'9'` rolls into `'A'` and `'Z'` into `'a'` without carrying. `'z'`
/// carries and leaves `'0'` behind. Anything whose successor is not an
/// alphabet character becomes `'0'` without carrying, which is how the
/// default `"-"` seed turns into `"0"`.
#[must_use]
pub fn increment_char(c: char) -> CharIncrement {
    let next = c as u32 + 1;

    match next {
        NINE_NEXT => {
            return CharIncrement {
                character: 'A',
                carry: false,
            };
        }
        UPPER_Z_NEXT => {
            return CharIncrement {
                character: 'a',
                carry: false,
            };
        }
        _ => {}
    }

    let carry = next == LOWER_Z_NEXT;
    let character = match char::from_u32(next) {
        Some(ch) if is_valid_code(next) => ch,
        _ => ZERO,
    };

    CharIncrement { character, carry }
}

/// Strictly validates a UID: non-empty and alphabet-only.
///
/// The counter itself accepts any string; this is for callers that want to
/// reject foreign values before handing them to [`crate::UidGenerator::set_last`].
pub fn validate(uid: &str) -> Result<(), UidError> {
    if uid.is_empty() {
        return Err(UidError::Empty);
    }

    match uid.chars().enumerate().find(|(_, c)| !is_alphabet_char(*c)) {
        Some((position, character)) => Err(UidError::InvalidCharacter {
            position,
            character,
        }),
        None => Ok(()),
    }
}
