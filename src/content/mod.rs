//! Content store seam and quip catalog types
//!
//! The store yields the full rule + quip catalog once at startup and is
//! queried again per delivery for a candidate pool keyed by rule kind or
//! trigger category plus the active intensity tier.

mod catalog;
mod static_store;
mod store;

pub use catalog::{ContentCatalog, GenericQuip, Intensity};
pub use static_store::StaticContentStore;
pub use store::{ContentError, ContentStore};
