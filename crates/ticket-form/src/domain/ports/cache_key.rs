//! Key under which the form snapshot is cached.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key used by the form store when talking to a [`super::SubmissionCache`].
///
/// Keys double as file names in directory-backed caches, so they must be a
/// single clean path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CacheKey(String);

/// Key used when no other key is configured.
pub const DEFAULT_CACHE_KEY: &str = "formData";

impl CacheKey {
    /// Construct a cache key after validating that it is non-empty, trimmed,
    /// and free of path syntax.
    pub fn new(value: impl Into<String>) -> Result<Self, CacheKeyValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CacheKeyValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(CacheKeyValidationError::ContainsWhitespace);
        }
        if raw.starts_with('.') || raw.contains(['/', '\\']) || raw.chars().any(char::is_control)
        {
            return Err(CacheKeyValidationError::InvalidCharacters);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for CacheKey {
    fn default() -> Self {
        Self(DEFAULT_CACHE_KEY.to_owned())
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<CacheKey> for String {
    fn from(value: CacheKey) -> Self {
        value.0
    }
}

impl TryFrom<String> for CacheKey {
    type Error = CacheKeyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation errors returned when constructing [`CacheKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheKeyValidationError {
    /// Key is empty after trimming whitespace.
    #[error("cache key must not be empty")]
    Empty,
    /// Key contains leading or trailing whitespace.
    #[error("cache key must not contain surrounding whitespace")]
    ContainsWhitespace,
    /// Key starts with a dot or contains separators or control characters.
    #[error("cache key must be a single plain name without path separators")]
    InvalidCharacters,
}
