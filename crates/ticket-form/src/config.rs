//! Form store settings.
//!
//! Settings are plain serde data so a host application can embed them in
//! whatever configuration document it already loads. Missing keys fall back
//! to defaults; unknown keys are rejected.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::CacheKey;

/// Settings controlling how the form store persists its snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormSettings {
    /// Key the submission snapshot is cached under.
    pub cache_key: CacheKey,
    /// Write the snapshot through to the cache on every field update.
    ///
    /// When disabled the host calls [`crate::FormStore::persist`] itself.
    pub persist_on_update: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            cache_key: CacheKey::default(),
            persist_on_update: true,
        }
    }
}

impl FormSettings {
    /// Parse settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is not valid JSON,
    /// contains unknown keys, or carries an invalid cache key.
    ///
    /// # Examples
    /// ```
    /// use ticket_form::FormSettings;
    ///
    /// let settings = FormSettings::from_json(r#"{"cacheKey": "ticketForm"}"#).expect("valid");
    /// assert_eq!(settings.cache_key.as_str(), "ticketForm");
    /// assert!(settings.persist_on_update);
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(raw).map_err(|err| SettingsError::Parse {
            message: err.to_string(),
        })
    }
}

/// Errors raised while loading [`FormSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The settings document could not be parsed.
    #[error("invalid form settings: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },
}
