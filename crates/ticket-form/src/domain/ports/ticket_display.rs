//! Port for presenting an issued ticket.
//!
//! The core hands over the finished [`Ticket`]; markup, layout and image
//! rendering belong to the adapter.

use crate::domain::Ticket;

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket display adapters.
    pub enum TicketDisplayError {
        /// The adapter could not render the ticket.
        Rendering {
            /// Adapter-provided detail.
            message: String,
        } => "ticket display failed: {message}",
    }
}

/// Collaborator that shows an issued ticket to the attendee.
#[cfg_attr(test, mockall::automock)]
pub trait TicketDisplay {
    /// Present `ticket`, superseding whatever ticket was shown before.
    fn present(&self, ticket: &Ticket) -> Result<(), TicketDisplayError>;
}

/// Fixture implementation that accepts and discards every ticket.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketDisplay;

impl TicketDisplay for FixtureTicketDisplay {
    fn present(&self, _ticket: &Ticket) -> Result<(), TicketDisplayError> {
        Ok(())
    }
}
