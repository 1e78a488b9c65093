//! SQLite rendition of the tag registry.
//!
//! Holds tag occurrences, tag specializations, their links to occurrences, and the message
//! situation table. Implements [`esptag_resolver::TagRegistry`] for the resolver.

mod error;
mod migration;
mod models;
mod store;

pub use error::{RegistryError, Result};
pub use models::{MessageSituation, Specialization};
pub use store::SqliteRegistry;
