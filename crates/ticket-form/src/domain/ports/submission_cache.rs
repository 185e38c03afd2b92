//! Port for the key-value cache that keeps the last-entered form values.
//!
//! The cache stores opaque text. The form store decides what the text means
//! and treats anything it cannot parse as "no prior data", so adapters never
//! need to validate what they hold.

use std::rc::Rc;

use super::{CacheKey, define_port_error};

define_port_error! {
    /// Errors surfaced by submission cache adapters.
    pub enum SubmissionCacheError {
        /// Cache backend is unavailable or refused the operation.
        Backend {
            /// Backend-provided detail.
            message: String,
        } => "submission cache backend failure: {message}",
        /// Reading or writing the underlying storage failed.
        Io {
            /// Underlying I/O error text.
            message: String,
        } => "submission cache I/O failed: {message}",
    }
}

/// Synchronous key-value cache holding serialised form snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionCache {
    /// Read the value stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &CacheKey) -> Result<Option<String>, SubmissionCacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &CacheKey, value: &str) -> Result<(), SubmissionCacheError>;
}

impl<C: SubmissionCache + ?Sized> SubmissionCache for &C {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, SubmissionCacheError> {
        (**self).get(key)
    }

    fn put(&self, key: &CacheKey, value: &str) -> Result<(), SubmissionCacheError> {
        (**self).put(key, value)
    }
}

impl<C: SubmissionCache + ?Sized> SubmissionCache for Rc<C> {
    fn get(&self, key: &CacheKey) -> Result<Option<String>, SubmissionCacheError> {
        (**self).get(key)
    }

    fn put(&self, key: &CacheKey, value: &str) -> Result<(), SubmissionCacheError> {
        (**self).put(key, value)
    }
}

/// Fixture implementation that never holds data.
///
/// Every lookup misses and every write is discarded. Use it where
/// persistence is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionCache;

impl SubmissionCache for FixtureSubmissionCache {
    fn get(&self, _key: &CacheKey) -> Result<Option<String>, SubmissionCacheError> {
        Ok(None)
    }

    fn put(&self, _key: &CacheKey, _value: &str) -> Result<(), SubmissionCacheError> {
        Ok(())
    }
}
