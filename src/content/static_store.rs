//! In-memory Content Store backed by a JSON document
//!
//! The default store: the host bootstrap parses its bundled content file
//! into a catalog once, and every later query filters in memory. Reports
//! `NotInitialized` for queries made before a successful load.

use super::catalog::{ContentCatalog, Intensity};
use super::store::{ContentError, ContentStore};
use crate::trigger::QuipCategory;
use async_trait::async_trait;
use std::sync::RwLock;

/// JSON-document-backed store holding the whole catalog in memory.
#[derive(Debug, Default)]
pub struct StaticContentStore {
    catalog: RwLock<Option<ContentCatalog>>,
}

impl StaticContentStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an already-built catalog.
    pub fn with_catalog(catalog: ContentCatalog) -> Self {
        Self {
            catalog: RwLock::new(Some(catalog)),
        }
    }

    /// Parse and install a JSON content document.
    pub fn load_json(&self, document: &str) -> Result<(), ContentError> {
        let catalog: ContentCatalog =
            serde_json::from_str(document).map_err(|e| ContentError::Malformed {
                detail: e.to_string(),
            })?;
        *self.catalog.write().unwrap() = Some(catalog);
        Ok(())
    }

    fn read_catalog<T>(
        &self,
        f: impl FnOnce(&ContentCatalog) -> T,
    ) -> Result<T, ContentError> {
        let guard = self.catalog.read().unwrap();
        match guard.as_ref() {
            Some(catalog) => Ok(f(catalog)),
            None => Err(ContentError::NotInitialized),
        }
    }
}

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn load_definitions(&self) -> Result<ContentCatalog, ContentError> {
        self.read_catalog(|catalog| catalog.clone())
    }

    async fn egg_quips(
        &self,
        kind: &str,
        intensity: Intensity,
    ) -> Result<Vec<String>, ContentError> {
        self.read_catalog(|catalog| {
            catalog
                .eggs
                .iter()
                .filter(|egg| egg.kind == kind)
                .flat_map(|egg| egg.quips.iter())
                .filter(|quip| quip.level <= intensity)
                .map(|quip| quip.text.clone())
                .collect()
        })
    }

    async fn category_quips(
        &self,
        category: QuipCategory,
        intensity: Intensity,
    ) -> Result<Vec<String>, ContentError> {
        self.read_catalog(|catalog| {
            catalog
                .generic
                .iter()
                .filter(|quip| quip.categories.contains(&category) && quip.level <= intensity)
                .map(|quip| quip.text.clone())
                .collect()
        })
    }
}
