//! Domain primitives for the ticket form.
//!
//! Purpose: hold the rules of the form independent of any UI or storage
//! technology. Adapters reach the domain only through [`ports`].
//!
//! Public surface:
//! - `Submission`, `FormField`, `AvatarUpload`: the editable form value.
//! - `validate`, `ErrorSet`, `FieldError`: pure validation.
//! - `issue`, `issue_with`, `Ticket`, `TicketId`: ticket issuance.
//! - `FormStore`: the single live form state, persisted through a cache port.

pub mod form_field;
pub mod form_store;
pub mod ports;
pub mod submission;
pub mod ticket;
pub mod validation;

pub use self::form_field::{FormField, UnknownFieldError};
pub use self::form_store::{FormPhase, FormStore, SubmitOutcome};
pub use self::submission::{AvatarUpload, Submission, SubmissionRecordError};
pub use self::ticket::{Ticket, TicketId, issue, issue_with};
pub use self::validation::{EMAIL_PATTERN, ErrorSet, FieldError, validate};
