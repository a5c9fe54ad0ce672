//! Condition evaluation — find the highest-priority fully-matching rule
//!
//! Pure and deterministic: the same (context, registry) pair always
//! yields the same result. No match is a normal outcome; a malformed
//! domain pattern is a typed error, never a silent miss.

use super::condition::{ConditionError, ConditionKind};
use super::registry::RuleRegistry;
use crate::context::ContextSnapshot;
use thiserror::Error;

/// Evaluation failure. Distinct from "no rule matched".
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("rule {rule_id}: invalid domain pattern {pattern:?}: {source}")]
    InvalidDomainPattern {
        rule_id: String,
        pattern: String,
        source: regex::Error,
    },
}

/// A successful rule match with diagnostics about which predicate kinds
/// contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule_id: String,
    /// Egg kind, the key the quip pool is fetched by.
    pub kind: String,
    pub matched: Vec<ConditionKind>,
}

/// Scan the registry in descending priority order and return the first
/// rule whose every present predicate holds.
pub fn evaluate(
    context: &ContextSnapshot,
    registry: &RuleRegistry,
) -> Result<Option<RuleMatch>, EvalError> {
    for rule in registry.rules() {
        match rule.conditions.evaluate(context) {
            Ok(Some(matched)) => {
                return Ok(Some(RuleMatch {
                    rule_id: rule.id.clone(),
                    kind: rule.kind.clone(),
                    matched,
                }));
            }
            Ok(None) => continue,
            Err(ConditionError::InvalidDomainPattern { pattern, source }) => {
                return Err(EvalError::InvalidDomainPattern {
                    rule_id: rule.id.clone(),
                    pattern,
                    source,
                });
            }
        }
    }
    Ok(None)
}
