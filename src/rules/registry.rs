//! Rule registry — the prioritized, validated easter-egg set
//!
//! Loaded once from the Content Store at startup and immutable afterward
//! (outside of test `clear()`). Holds a priority-sorted vec for the
//! evaluator's scan plus an id-keyed map for duplicate detection.

use super::rule::EggRule;
use crate::content::{ContentError, ContentStore};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Registration- and load-time rule errors. These indicate authoring
/// bugs, not runtime conditions, and are surfaced to the bootstrap caller.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("content store yielded zero rules")]
    NoRulesRegistered,

    #[error("duplicate rule id: {id}")]
    DuplicateRuleId { id: String },

    #[error("rule {id} has no conditions; an always-matching egg is a design error")]
    InvalidConditions { id: String },

    #[error("rule content load failed: {0}")]
    Content(#[from] ContentError),
}

/// Priority-ordered rule set with id-keyed duplicate detection.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    /// Sorted descending by priority; stable on ties, so among equal
    /// tiers the first-registered rule stays first.
    ordered: Vec<EggRule>,
    by_id: HashMap<String, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all egg definitions from the Content Store.
    ///
    /// Fails if the store yields zero rules or any definition fails
    /// registration validation. No retry: the caller decides whether a
    /// failed load aborts startup.
    pub async fn load(store: &dyn ContentStore) -> Result<Self, RuleError> {
        let catalog = store.load_definitions().await?;
        let mut registry = Self::new();
        for def in &catalog.eggs {
            registry.register(EggRule::from(def))?;
        }
        if registry.is_empty() {
            return Err(RuleError::NoRulesRegistered);
        }
        debug!(rules = registry.len(), "rule registry loaded");
        Ok(registry)
    }

    /// Register a rule, validating id uniqueness and a non-empty
    /// condition set.
    pub fn register(&mut self, rule: EggRule) -> Result<(), RuleError> {
        if self.by_id.contains_key(&rule.id) {
            warn!(id = %rule.id, "rejecting duplicate rule id");
            return Err(RuleError::DuplicateRuleId { id: rule.id });
        }
        if rule.conditions.is_empty() {
            warn!(id = %rule.id, "rejecting rule with empty condition set");
            return Err(RuleError::InvalidConditions { id: rule.id });
        }

        // Insert after the last rule of >= priority so registration
        // order breaks ties.
        let position = self
            .ordered
            .iter()
            .position(|existing| existing.priority < rule.priority)
            .unwrap_or(self.ordered.len());
        self.ordered.insert(position, rule);
        self.reindex();
        Ok(())
    }

    /// Rules in evaluation order (descending priority, stable).
    pub fn rules(&self) -> &[EggRule] {
        &self.ordered
    }

    pub fn get(&self, id: &str) -> Option<&EggRule> {
        self.by_id.get(id).map(|&i| &self.ordered[i])
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Drop every rule. Introspection/testing hook.
    pub fn clear(&mut self) {
        self.ordered.clear();
        self.by_id.clear();
    }

    fn reindex(&mut self) {
        self.by_id = self
            .ordered
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.id.clone(), i))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::condition::{ConditionSet, NumericCondition};
    use crate::rules::rule::PriorityTier;

    fn rule(id: &str, tier: PriorityTier, exact_tabs: i64) -> EggRule {
        EggRule::new(
            id,
            "test-kind",
            tier,
            ConditionSet {
                tab_count: Some(NumericCondition::Exact(exact_tabs)),
                ..Default::default()
            },
        )
    }

    #[test]
    fn register_orders_by_descending_priority() {
        let mut registry = RuleRegistry::new();
        registry.register(rule("common", PriorityTier::Common, 1)).unwrap();
        registry
            .register(rule("legendary", PriorityTier::Legendary, 2))
            .unwrap();
        registry.register(rule("rare", PriorityTier::Rare, 3)).unwrap();

        let ids: Vec<_> = registry.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["legendary", "rare", "common"]);
    }

    #[test]
    fn ties_keep_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(rule("first", PriorityTier::Rare, 1)).unwrap();
        registry.register(rule("second", PriorityTier::Rare, 2)).unwrap();
        registry.register(rule("third", PriorityTier::Rare, 3)).unwrap();

        let ids: Vec<_> = registry.rules().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = RuleRegistry::new();
        registry.register(rule("egg", PriorityTier::Common, 1)).unwrap();
        let err = registry
            .register(rule("egg", PriorityTier::Rare, 2))
            .unwrap_err();
        assert!(matches!(err, RuleError::DuplicateRuleId { id } if id == "egg"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_conditions_are_rejected() {
        let mut registry = RuleRegistry::new();
        let bare = EggRule::new(
            "always",
            "test-kind",
            PriorityTier::Common,
            ConditionSet::default(),
        );
        let err = registry.register(bare).unwrap_err();
        assert!(matches!(err, RuleError::InvalidConditions { id } if id == "always"));
        assert!(registry.is_empty());
    }

    #[test]
    fn get_and_clear() {
        let mut registry = RuleRegistry::new();
        registry.register(rule("egg", PriorityTier::Common, 1)).unwrap();
        assert!(registry.get("egg").is_some());
        assert!(registry.get("other").is_none());

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get("egg").is_none());
    }

    #[tokio::test]
    async fn load_fails_on_zero_rules() {
        use crate::content::{ContentCatalog, StaticContentStore};
        let store = StaticContentStore::with_catalog(ContentCatalog::default());
        let err = RuleRegistry::load(&store).await.unwrap_err();
        assert!(matches!(err, RuleError::NoRulesRegistered));
    }

    #[tokio::test]
    async fn load_populates_from_store() {
        use crate::content::StaticContentStore;
        let store = StaticContentStore::new();
        store
            .load_json(
                r#"{
                    "eggs": [
                        {
                            "id": "answer",
                            "kind": "tab-milestone",
                            "rarity": "legendary",
                            "conditions": { "tab-count": { "exact": 42 } },
                            "quips": [{ "text": "Don't panic.", "level": "mild" }]
                        }
                    ],
                    "generic": []
                }"#,
            )
            .unwrap();

        let registry = RuleRegistry::load(&store).await.unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.rules()[0].priority, 40);
    }
}
