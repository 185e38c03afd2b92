//! Ticket issuance.
//!
//! A [`Ticket`] is a snapshot of a validated [`Submission`] plus a fresh
//! [`TicketId`]. Issuing performs no validation: callers run
//! [`super::validate`] first and only issue when the error set is empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Submission;
use super::ports::{RandomTicketIds, TicketIdSource};

/// Unique ticket identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random [`TicketId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Immutable record produced by a successful submission.
///
/// ## Invariants
/// - `full_name`, `email` and `avatar` are byte-for-byte copies of the
///   submission they were issued from.
/// - The ticket holds no link back to that submission; later edits to the
///   form never change it.
///
/// Serialises as `{"id", "fullName", "email", "avatar"}` for the display
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    full_name: String,
    email: String,
    avatar: String,
}

impl Ticket {
    /// Stable ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Attendee name as entered.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Attendee email as entered.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Encoded avatar as entered.
    #[must_use]
    pub fn avatar(&self) -> &str {
        self.avatar.as_str()
    }
}

/// Issue a ticket with a random identifier.
///
/// # Examples
/// ```
/// use ticket_form::{Submission, issue};
///
/// let submission = Submission::new("Ada", "ada@example.com", "data:image/png;base64,AAA=");
/// let ticket = issue(&submission);
/// assert_eq!(ticket.email(), submission.email());
/// ```
#[must_use]
pub fn issue(submission: &Submission) -> Ticket {
    issue_with(&RandomTicketIds, submission)
}

/// Issue a ticket drawing its identifier from `ids`.
#[must_use]
pub fn issue_with<S: TicketIdSource + ?Sized>(ids: &S, submission: &Submission) -> Ticket {
    Ticket {
        id: ids.next_id(),
        full_name: submission.full_name().to_owned(),
        email: submission.email().to_owned(),
        avatar: submission.avatar().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    //! Issuance copies fields verbatim and never repeats identifiers.
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::FormField;
    use crate::domain::ports::MockTicketIdSource;

    #[fixture]
    fn submission() -> Submission {
        Submission::new(
            " Ada Lovelace ",
            "ADA@example.com",
            "data:image/png;base64,AAA=",
        )
    }

    #[rstest]
    fn ticket_copies_fields_verbatim(submission: Submission) {
        let ticket = issue(&submission);
        assert_eq!(ticket.full_name(), submission.full_name());
        assert_eq!(ticket.email(), submission.email());
        assert_eq!(ticket.avatar(), submission.avatar());
        assert!(!ticket.id().to_string().is_empty());
    }

    #[rstest]
    fn ticket_is_independent_of_later_edits(submission: Submission) {
        let ticket = issue(&submission);
        let edited = submission.with(FormField::FullName, "Grace Hopper");
        assert_eq!(ticket.full_name(), " Ada Lovelace ");
        assert_eq!(edited.full_name(), "Grace Hopper");
    }

    #[rstest]
    fn identifiers_come_from_the_source(submission: Submission) {
        let expected = TicketId::from_uuid(Uuid::from_u128(7));
        let mut ids = MockTicketIdSource::new();
        ids.expect_next_id().times(1).return_const(expected);

        let ticket = issue_with(&ids, &submission);
        assert_eq!(ticket.id(), expected);
    }

    #[rstest]
    fn ten_thousand_tickets_have_distinct_ids(submission: Submission) {
        let ids: HashSet<TicketId> = (0..10_000).map(|_| issue(&submission).id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn random_ids_are_version_four() {
        assert_eq!(TicketId::random().as_uuid().get_version_num(), 4);
    }

    #[rstest]
    fn ticket_serialises_for_display(submission: Submission) {
        let mut ids = MockTicketIdSource::new();
        ids.expect_next_id()
            .return_const(TicketId::from_uuid(Uuid::from_u128(1)));

        let ticket = issue_with(&ids, &submission);
        insta::assert_json_snapshot!(ticket, @r#"
        {
          "id": "00000000-0000-0000-0000-000000000001",
          "fullName": " Ada Lovelace ",
          "email": "ADA@example.com",
          "avatar": "data:image/png;base64,AAA="
        }
        "#);
    }
}
