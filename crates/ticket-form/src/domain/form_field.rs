//! Names of the editable form fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three fields collected by the form.
///
/// The serialised form is the wire name used by the persisted snapshot and
/// the error map handed to the UI (`fullName`, `email`, `avatar`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// The attendee's full name.
    FullName,
    /// The attendee's email address.
    Email,
    /// The encoded avatar image.
    Avatar,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [Self; 3] = [Self::FullName, Self::Email, Self::Avatar];

    /// Stable identifier used in persisted snapshots and error maps.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Avatar => "avatar",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Returned when a field name does not match any form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {name}")]
pub struct UnknownFieldError {
    /// The name that failed to parse.
    pub name: String,
}

impl FromStr for FormField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == value)
            .ok_or_else(|| UnknownFieldError {
                name: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    //! Covers wire names and parsing of form fields.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fullName", FormField::FullName)]
    #[case("email", FormField::Email)]
    #[case("avatar", FormField::Avatar)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: FormField) {
        assert_eq!(raw.parse::<FormField>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("full_name")]
    #[case("Email")]
    #[case("")]
    fn rejects_unknown_names(#[case] raw: &str) {
        let err = raw.parse::<FormField>().expect_err("unknown field rejected");
        assert_eq!(err.name, raw);
        assert_eq!(err.to_string(), format!("unknown form field: {raw}"));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&FormField::FullName).expect("serialise field");
        assert_eq!(json, "\"fullName\"");
        let parsed: FormField = serde_json::from_str("\"avatar\"").expect("parse field");
        assert_eq!(parsed, FormField::Avatar);
    }
}
