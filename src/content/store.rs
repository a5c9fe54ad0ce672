//! Content Store trait definition

use super::catalog::{ContentCatalog, Intensity};
use crate::trigger::QuipCategory;
use async_trait::async_trait;
use thiserror::Error;

/// Errors the Content Store reports instead of panicking.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content store not initialized")]
    NotInitialized,

    #[error("malformed content document: {detail}")]
    Malformed { detail: String },

    #[error("content unavailable: {detail}")]
    Unavailable { detail: String },
}

/// The store the engine loads rule content from and fetches candidate
/// pools through.
///
/// `load_definitions` runs once at startup; the two pool fetches run per
/// delivery and are the engine's first suspension point.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Yield the full catalog: easter-egg definitions plus generic quips.
    async fn load_definitions(&self) -> Result<ContentCatalog, ContentError>;

    /// Candidate pool for a matched egg, keyed by egg kind and the
    /// active intensity tier.
    async fn egg_quips(
        &self,
        kind: &str,
        intensity: Intensity,
    ) -> Result<Vec<String>, ContentError>;

    /// Candidate pool for a trigger category at the active intensity tier.
    async fn category_quips(
        &self,
        category: QuipCategory,
        intensity: Intensity,
    ) -> Result<Vec<String>, ContentError>;
}
