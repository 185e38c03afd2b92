//! Process-local cache backed by a hash map.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::{CacheKey, SubmissionCache, SubmissionCacheError};

/// Key-value cache held in memory.
///
/// Single-threaded by construction: interior mutability uses `RefCell`, so
/// the cache is neither `Sync` nor meant to be shared across threads.
#[derive(Debug, Default)]
pub struct InMemorySubmissionCache {
    entries: RefCell<HashMap<CacheKey, String>>,
}

impl InMemorySubmissionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with an entry.
    #[must_use]
    pub fn with_entry(self, key: CacheKey, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key, value.into());
        self
    }

    /// Copy of the value stored under `key`.
    #[must_use]
    pub fn entry(&self, key: &CacheKey) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SubmissionCache for InMemorySubmissionCache {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, SubmissionCacheError> {
        Ok(self.entry(key))
    }

    fn put(&self, key: &CacheKey, value: &str) -> Result<(), SubmissionCacheError> {
        self.entries
            .borrow_mut()
            .insert(key.clone(), value.to_owned());
        Ok(())
    }
}
