//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cache_key;
mod submission_cache;
mod ticket_display;
mod ticket_id_source;

pub use cache_key::{CacheKey, CacheKeyValidationError, DEFAULT_CACHE_KEY};
#[cfg(test)]
pub use submission_cache::MockSubmissionCache;
pub use submission_cache::{FixtureSubmissionCache, SubmissionCache, SubmissionCacheError};
#[cfg(test)]
pub use ticket_display::MockTicketDisplay;
pub use ticket_display::{FixtureTicketDisplay, TicketDisplay, TicketDisplayError};
#[cfg(test)]
pub use ticket_id_source::MockTicketIdSource;
pub use ticket_id_source::{RandomTicketIds, TicketIdSource};
