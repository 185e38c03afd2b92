//! Submission validation.
//!
//! [`validate`] is pure: it reads a [`Submission`] and returns an
//! [`ErrorSet`] naming every failing field. Validation failures are data,
//! never `Err`, because the UI shows them inline next to each field.
//!
//! # Rules
//!
//! - Full name: required.
//! - Email: required, then must match [`EMAIL_PATTERN`] (case-insensitive).
//!   A field carries at most one error.
//! - Avatar: required; any non-empty payload is accepted.
//!
//! "Required" means the value is not the empty string. Whitespace is not
//! trimmed.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{FormField, Submission};

/// Pattern an email address must match, applied case-insensitively.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // ASCII-only matching so case folding never admits non-ASCII letters.
        RegexBuilder::new(EMAIL_PATTERN)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A single field failure. `Display` yields the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// The full name is empty.
    #[error("Full Name is required")]
    FullNameRequired,
    /// The email is empty.
    #[error("Email is required")]
    EmailRequired,
    /// The email is present but does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmailFormat,
    /// No avatar has been supplied.
    #[error("Avatar is required")]
    AvatarRequired,
}

impl FieldError {
    /// The field this failure belongs to.
    #[must_use]
    pub const fn field(self) -> FormField {
        match self {
            Self::FullNameRequired => FormField::FullName,
            Self::EmailRequired | Self::InvalidEmailFormat => FormField::Email,
            Self::AvatarRequired => FormField::Avatar,
        }
    }
}

/// Mapping from field to validation failure.
///
/// A field without an entry is valid; an empty set means the submission may
/// be issued. Serialises as `{"<wireName>": "<message>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<FormField, FieldError>);

impl ErrorSet {
    /// An empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The failure recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// The user-facing message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// Iterate over failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// Field wire names mapped to messages, as shown by the UI.
    #[must_use]
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.wire_name(), error.to_string()))
            .collect()
    }

    /// Record a failure, replacing any earlier failure for the same field.
    pub(crate) fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    /// Drop the failure for `field`, returning it.
    pub(crate) fn clear(&mut self, field: FormField) -> Option<FieldError> {
        self.0.remove(&field)
    }
}

impl FromIterator<FieldError> for ErrorSet {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut set = Self::new();
        for error in iter {
            set.insert(error);
        }
        set
    }
}

impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.iter()
                .map(|(field, error)| (field.wire_name(), error.to_string())),
        )
    }
}

/// Validate a submission snapshot.
///
/// # Examples
/// ```
/// use ticket_form::{FieldError, FormField, Submission, validate};
///
/// let errors = validate(&Submission::new("", "x", ""));
/// assert_eq!(errors.get(FormField::FullName), Some(FieldError::FullNameRequired));
/// assert_eq!(errors.get(FormField::Email), Some(FieldError::InvalidEmailFormat));
/// assert_eq!(errors.get(FormField::Avatar), Some(FieldError::AvatarRequired));
/// ```
#[must_use]
pub fn validate(submission: &Submission) -> ErrorSet {
    [
        check_full_name(submission.full_name()),
        check_email(submission.email()),
        check_avatar(submission.avatar()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_full_name(full_name: &str) -> Option<FieldError> {
    full_name.is_empty().then_some(FieldError::FullNameRequired)
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::EmailRequired);
    }
    (!email_regex().is_match(email)).then_some(FieldError::InvalidEmailFormat)
}

fn check_avatar(avatar: &str) -> Option<FieldError> {
    avatar.is_empty().then_some(FieldError::AvatarRequired)
}

#[cfg(test)]
mod tests {
    //! Validation rules, message text, and error-set behaviour.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_submission() -> Submission {
        Submission::new(
            "Ada Lovelace",
            "ada@example.com",
            "data:image/png;base64,AAA=",
        )
    }

    #[rstest]
    fn complete_submission_has_no_errors(valid_submission: Submission) {
        assert!(validate(&valid_submission).is_empty());
    }

    #[rstest]
    fn empty_form_reports_every_field() {
        let errors = validate(&Submission::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(FormField::FullName),
            Some(FieldError::FullNameRequired)
        );
        assert_eq!(
            errors.get(FormField::Email),
            Some(FieldError::EmailRequired)
        );
        assert_eq!(
            errors.get(FormField::Avatar),
            Some(FieldError::AvatarRequired)
        );
    }

    #[rstest]
    fn empty_full_name_is_rejected(valid_submission: Submission) {
        let errors = validate(&valid_submission.with(FormField::FullName, ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FormField::FullName).as_deref(),
            Some("Full Name is required")
        );
    }

    #[rstest]
    #[case("a@b")]
    #[case("foo.com")]
    #[case("ada@example.c")]
    #[case("ada@@example.com")]
    #[case("ada example@example.com")]
    #[case("@example.com")]
    #[case("ada@example.com ")]
    #[case("ada@exämple.com")]
    #[case("ada@example.co\u{17f}")]
    fn malformed_email_reports_format_error(valid_submission: Submission, #[case] email: &str) {
        let errors = validate(&valid_submission.with(FormField::Email, email));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Email),
            Some(FieldError::InvalidEmailFormat)
        );
        assert_eq!(
            errors.message(FormField::Email).as_deref(),
            Some("Invalid email format")
        );
    }

    #[rstest]
    fn empty_email_reports_only_required(valid_submission: Submission) {
        let errors = validate(&valid_submission.with(FormField::Email, ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Email),
            Some(FieldError::EmailRequired)
        );
    }

    #[rstest]
    #[case("ada@example.com")]
    #[case("ADA@EXAMPLE.COM")]
    #[case("first.last+tag@sub.example.co.uk")]
    #[case("x_y%z-1@a-b.io")]
    fn well_formed_email_passes(valid_submission: Submission, #[case] email: &str) {
        let submission = valid_submission.with(FormField::Email, email);
        assert!(validate(&submission).is_empty());
    }

    #[rstest]
    #[case(" ")]
    #[case("not really an image")]
    #[case("https://cdn.example.com/avatar.png")]
    fn any_non_empty_avatar_is_accepted(valid_submission: Submission, #[case] avatar: &str) {
        let submission = valid_submission.with(FormField::Avatar, avatar);
        assert!(validate(&submission).is_empty());
    }

    #[rstest]
    fn whitespace_full_name_counts_as_present(valid_submission: Submission) {
        let submission = valid_submission.with(FormField::FullName, "   ");
        assert!(validate(&submission).is_empty());
    }

    #[rstest]
    #[case(Submission::default())]
    #[case(Submission::new("", "x", ""))]
    #[case(Submission::new("Ada", "ada@example.com", "a"))]
    fn validation_is_idempotent(#[case] submission: Submission) {
        let before = submission.clone();
        assert_eq!(validate(&submission), validate(&submission));
        assert_eq!(submission, before);
    }

    #[test]
    fn error_set_serialises_as_wire_name_map() {
        let errors = validate(&Submission::new("", "x", ""));
        let value = serde_json::to_value(&errors).expect("serialise errors");
        assert_eq!(
            value,
            serde_json::json!({
                "fullName": "Full Name is required",
                "email": "Invalid email format",
                "avatar": "Avatar is required",
            })
        );
        assert_eq!(errors.to_messages().len(), 3);
    }

    #[test]
    fn clear_removes_a_single_field() {
        let mut errors = validate(&Submission::default());
        assert_eq!(
            errors.clear(FormField::Email),
            Some(FieldError::EmailRequired)
        );
        assert_eq!(errors.clear(FormField::Email), None);
        assert_eq!(errors.len(), 2);
    }
}
