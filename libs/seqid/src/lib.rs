//! # seqid
//!
//! Cheap, predictable, sequential string UIDs without coordination,
//! randomness, or external state.
//!
//! ## Design Principles
//!
//! - A UID is a base-62 string counter over `0-9A-Za-z`, ordered by character code
//! - Position 0 is the least significant digit; carries move toward the end
//! - Increments never change the width of the UID unless [`Overflow::Extend`] is chosen
//! - Every counter operation is total: bad input is normalized, never rejected
//!
//! ## Example
//!
//! ```
//! use seqid::{Counter, UidGenerator};
//!
//! let mut counter = Counter::new();
//! assert_eq!(counter.last(), "-");
//! assert_eq!(counter.generate(), "0");
//! assert_eq!(counter.generate(), "1");
//!
//! counter.set_last(Some("z0"));
//! assert_eq!(counter.generate(), "01");
//! ```
//!
//! UIDs are unique only within one counter. Share a counter across threads
//! through [`SharedCounter`].

pub mod alphabet;
mod config;
mod counter;
mod error;
mod shared;

pub use config::CounterConfig;
pub use counter::{
    Counter, Overflow, UidGenerator, DEFAULT_INITIAL_UID, DEFAULT_MAXIMUM_UID_LENGTH,
};
pub use error::UidError;
pub use shared::SharedCounter;
