//! Submission cache adapters.
//!
//! - [`InMemorySubmissionCache`] keeps entries for the lifetime of the value,
//!   standing in for a browser's local storage in hosts and tests.
//! - [`DirectorySubmissionCache`] keeps one JSON file per key inside a
//!   directory so a form survives restarts of a desktop or terminal host.

mod directory;
mod in_memory;

pub use directory::DirectorySubmissionCache;
pub use in_memory::InMemorySubmissionCache;
