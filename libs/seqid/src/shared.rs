//! Thread-safe handle over a single counter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::counter::{Counter, UidGenerator};

/// Cloneable handle that serializes access to one [`Counter`].
///
/// Every clone shares the same underlying cell, so UIDs handed out through
/// any clone come from one sequence.
#[derive(Debug, Clone, Default)]
pub struct SharedCounter {
    inner: Arc<Mutex<Counter>>,
}

impl SharedCounter {
    /// Wraps a counter.
    #[must_use]
    pub fn new(counter: Counter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(counter)),
        }
    }

    /// Returns a copy of the last UID.
    #[must_use]
    pub fn last(&self) -> String {
        self.lock().last().to_string()
    }

    /// Overwrites the last UID. See [`UidGenerator::set_last`].
    pub fn set_last(&self, uid: Option<&str>) {
        self.lock().set_last(uid);
    }

    /// Advances the shared counter and returns the new UID.
    pub fn generate(&self) -> String {
        self.lock().generate().to_string()
    }

    /// Returns the counter if this is the only handle, otherwise a copy of it.
    #[must_use]
    pub fn into_inner(self) -> Counter {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => {
                let counter = shared.lock().unwrap_or_else(PoisonError::into_inner).clone();
                counter
            }
        }
    }

    // Counter operations never panic mid-update, so a poisoned lock still
    // guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, Counter> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Counter> for SharedCounter {
    fn from(counter: Counter) -> Self {
        Self::new(counter)
    }
}
