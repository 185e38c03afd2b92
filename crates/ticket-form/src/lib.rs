//! Conference ticket form core.
//!
//! The crate owns the part of the ticket generator that carries rules: the
//! live form state, field validation, and issuing an immutable [`Ticket`]
//! once a submission passes. Rendering, file pickers, and the browser-style
//! key-value cache are collaborators reached through the ports in
//! [`domain::ports`].
//!
//! # Example
//!
//! ```
//! use ticket_form::{FormField, FormSettings, FormStore, SubmitOutcome};
//! use ticket_form::outbound::cache::InMemorySubmissionCache;
//!
//! let settings = FormSettings::default();
//! let mut store = FormStore::restore(InMemorySubmissionCache::new(), &settings);
//!
//! store.update(FormField::FullName, "Ada Lovelace");
//! store.update(FormField::Email, "ada@example.com");
//! store.update(FormField::Avatar, "data:image/png;base64,AAA=");
//!
//! match store.submit() {
//!     SubmitOutcome::Issued(ticket) => assert_eq!(ticket.full_name(), "Ada Lovelace"),
//!     SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors:?}"),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{FormSettings, SettingsError};
pub use domain::{
    AvatarUpload, ErrorSet, FieldError, FormField, FormPhase, FormStore, Submission,
    SubmissionRecordError, SubmitOutcome, Ticket, TicketId, UnknownFieldError, issue, issue_with,
    validate,
};
