//! Test doubles shared by unit and integration tests.
//!
//! Enabled for the crate's own tests and, through the `test-support`
//! feature, for integration tests.

use std::cell::{Cell, RefCell};

use uuid::Uuid;

use crate::domain::ports::{TicketDisplay, TicketDisplayError, TicketIdSource};
use crate::domain::{Ticket, TicketId};

/// Ticket display that records every ticket it is asked to present.
#[derive(Debug, Default)]
pub struct RecordingTicketDisplay {
    presented: RefCell<Vec<Ticket>>,
}

impl RecordingTicketDisplay {
    /// Tickets presented so far, oldest first.
    #[must_use]
    pub fn presented(&self) -> Vec<Ticket> {
        self.presented.borrow().clone()
    }

    /// The ticket currently on display, if any.
    #[must_use]
    pub fn showing(&self) -> Option<Ticket> {
        self.presented.borrow().last().cloned()
    }
}

impl TicketDisplay for RecordingTicketDisplay {
    fn present(&self, ticket: &Ticket) -> Result<(), TicketDisplayError> {
        self.presented.borrow_mut().push(ticket.clone());
        Ok(())
    }
}

/// Deterministic identifiers counting up from 1.
#[derive(Debug)]
pub struct SequentialTicketIds {
    next: Cell<u128>,
}

impl SequentialTicketIds {
    /// Start counting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Cell::new(1) }
    }
}

impl Default for SequentialTicketIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketIdSource for SequentialTicketIds {
    fn next_id(&self) -> TicketId {
        let value = self.next.get();
        self.next.set(value.wrapping_add(1));
        TicketId::from_uuid(Uuid::from_u128(value))
    }
}
