//! Catalog value types: intensity tiers and the generic quip pool

use crate::rules::EggDefinition;
use crate::trigger::QuipCategory;
use serde::{Deserialize, Serialize};

/// How spicy the delivered humor is allowed to get. Ordered: a pool
/// fetched at a given tier admits quips at or below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Mild,
    #[default]
    Standard,
    Wild,
}

/// A category-tagged fallback quip used when no easter egg matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenericQuip {
    pub id: String,
    pub text: String,
    /// Trigger categories this quip applies to.
    pub categories: Vec<QuipCategory>,
    pub level: Intensity,
}

/// Everything the Content Store yields at startup: the easter-egg
/// definitions and the generic quip catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentCatalog {
    #[serde(default)]
    pub eggs: Vec<EggDefinition>,
    #[serde(default)]
    pub generic: Vec<GenericQuip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_tiers_are_ordered() {
        assert!(Intensity::Mild < Intensity::Standard);
        assert!(Intensity::Standard < Intensity::Wild);
    }

    #[test]
    fn catalog_parses_with_missing_sections() {
        let catalog: ContentCatalog = serde_json::from_str(r#"{ "generic": [] }"#).unwrap();
        assert!(catalog.eggs.is_empty());
        assert!(catalog.generic.is_empty());
    }

    #[test]
    fn generic_quip_parses_from_json() {
        let quip: GenericQuip = serde_json::from_str(
            r#"{
                "id": "close-1",
                "text": "Another one bites the dust.",
                "categories": ["tab-closed", "chance-close"],
                "level": "mild"
            }"#,
        )
        .unwrap();
        assert_eq!(quip.level, Intensity::Mild);
        assert_eq!(quip.categories.len(), 2);
    }
}
