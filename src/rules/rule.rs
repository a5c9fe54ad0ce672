//! Easter-egg rule types and priority tiers
//!
//! Authors tag each egg with a coarse rarity tier; the numeric priority
//! the evaluator orders by is derived from the tier at load time. The
//! serde-facing `EggDefinition` is the Content Store document shape;
//! `EggRule` is what the registry holds after validation.

use super::condition::ConditionSet;
use crate::content::Intensity;
use serde::{Deserialize, Serialize};

/// Coarse rarity tier an egg is authored with. Rarer eggs outrank common
/// ones when several match the same context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityTier {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl PriorityTier {
    /// The fixed numeric priority this tier maps to.
    pub fn priority(self) -> u8 {
        match self {
            Self::Common => 10,
            Self::Uncommon => 20,
            Self::Rare => 30,
            Self::Legendary => 40,
        }
    }
}

/// A single quip inside an egg's pool, tagged with its intensity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeveledQuip {
    pub text: String,
    pub level: Intensity,
}

/// Content Store document shape for one easter egg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EggDefinition {
    pub id: String,
    /// Egg kind, the key its quip pool is fetched by at delivery time.
    pub kind: String,
    pub rarity: PriorityTier,
    pub conditions: ConditionSet,
    pub quips: Vec<LeveledQuip>,
}

/// A validated rule held by the registry.
///
/// Immutable after registration. Quip pools stay in the Content Store;
/// the rule carries only what evaluation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct EggRule {
    pub id: String,
    pub kind: String,
    pub tier: PriorityTier,
    /// Derived from `tier` at registration.
    pub priority: u8,
    pub conditions: ConditionSet,
}

impl EggRule {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        tier: PriorityTier,
        conditions: ConditionSet,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            tier,
            priority: tier.priority(),
            conditions,
        }
    }
}

impl From<&EggDefinition> for EggRule {
    fn from(def: &EggDefinition) -> Self {
        Self::new(
            def.id.clone(),
            def.kind.clone(),
            def.rarity,
            def.conditions.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::condition::NumericCondition;

    #[test]
    fn tiers_map_to_fixed_ascending_priorities() {
        assert!(PriorityTier::Legendary.priority() > PriorityTier::Rare.priority());
        assert!(PriorityTier::Rare.priority() > PriorityTier::Uncommon.priority());
        assert!(PriorityTier::Uncommon.priority() > PriorityTier::Common.priority());
    }

    #[test]
    fn rule_derives_priority_from_tier() {
        let rule = EggRule::new(
            "answer",
            "tab-milestone",
            PriorityTier::Legendary,
            ConditionSet {
                tab_count: Some(NumericCondition::Exact(42)),
                ..Default::default()
            },
        );
        assert_eq!(rule.priority, 40);
    }

    #[test]
    fn definition_parses_from_json() {
        let def: EggDefinition = serde_json::from_str(
            r#"{
                "id": "midnight-hoarder",
                "kind": "hoarder",
                "rarity": "rare",
                "conditions": {
                    "tab-count": { "range": { "min": 50 } },
                    "hours": { "start": 22, "end": 4 }
                },
                "quips": [
                    { "text": "50 tabs at midnight. Bold strategy.", "level": "standard" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(def.rarity, PriorityTier::Rare);
        assert_eq!(def.quips.len(), 1);
        let rule = EggRule::from(&def);
        assert_eq!(rule.priority, 30);
        assert_eq!(rule.kind, "hoarder");
    }
}
