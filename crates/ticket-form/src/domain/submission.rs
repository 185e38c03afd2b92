//! The editable form value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::FormField;

/// In-progress form data before validation.
///
/// ## Invariants
/// - All three fields are always present. An unset field is the empty
///   string, never an absent value.
/// - Values are stored verbatim; nothing is trimmed or normalised.
///
/// The serialised shape is the flat record written to the submission cache:
/// `{"fullName": "...", "email": "...", "avatar": "..."}`. Deserialising
/// anything other than a map holding all three string fields fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct Submission {
    full_name: String,
    email: String,
    avatar: String,
}

impl Submission {
    /// Build a submission from its three field values.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// The attendee's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// The attendee's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The encoded avatar payload; empty when unset.
    #[must_use]
    pub fn avatar(&self) -> &str {
        self.avatar.as_str()
    }

    /// Read a field by name.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => self.full_name(),
            FormField::Email => self.email(),
            FormField::Avatar => self.avatar(),
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Avatar => &mut self.avatar,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`Submission::set`].
    #[must_use]
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// Why a cached record cannot be read back as a [`Submission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionRecordError {
    /// A field is absent or holds something other than a string.
    #[error("field `{field}` must be a string")]
    NotAString {
        /// The offending field.
        field: FormField,
    },
}

impl TryFrom<Map<String, Value>> for Submission {
    type Error = SubmissionRecordError;

    fn try_from(mut record: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut take = |field: FormField| match record.remove(field.wire_name()) {
            Some(Value::String(value)) => Ok(value),
            _ => Err(SubmissionRecordError::NotAString { field }),
        };
        Ok(Self {
            full_name: take(FormField::FullName)?,
            email: take(FormField::Email)?,
            avatar: take(FormField::Avatar)?,
        })
    }
}

/// Avatar value handed over by the file-picker collaborator.
///
/// The avatar is kept as an opaque data URI. The core never opens or decodes
/// image bytes; it only assembles the URI when the collaborator supplies the
/// media type and base64 payload separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarUpload {
    /// A complete `data:` URI produced by the collaborator.
    DataUri(String),
    /// A media type and base64 payload to be joined into a data URI.
    Base64 {
        /// Media type of the image, e.g. `image/png`.
        media_type: String,
        /// Base64-encoded image bytes.
        payload: String,
    },
    /// The selection was cleared.
    Cleared,
}

impl AvatarUpload {
    /// Produce the string stored in [`Submission::avatar`].
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::DataUri(uri) => uri,
            Self::Base64 {
                media_type,
                payload,
            } => format!("data:{media_type};base64,{payload}"),
            Self::Cleared => String::new(),
        }
    }
}
