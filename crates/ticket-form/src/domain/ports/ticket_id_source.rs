//! Port supplying identifiers for newly issued tickets.

use crate::domain::TicketId;

/// Source of ticket identifiers.
///
/// Implementations must never hand out the same identifier twice within a
/// process.
#[cfg_attr(test, mockall::automock)]
pub trait TicketIdSource {
    /// Produce the identifier for the next ticket.
    fn next_id(&self) -> TicketId;
}

/// Random UUID v4 identifiers (122 random bits each).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTicketIds;

impl TicketIdSource for RandomTicketIds {
    fn next_id(&self) -> TicketId {
        TicketId::random()
    }
}

impl<S: TicketIdSource + ?Sized> TicketIdSource for &S {
    fn next_id(&self) -> TicketId {
        (**self).next_id()
    }
}
