//! Easter-egg rules: predicate types, registry, and evaluation
//!
//! Rules are AND-combined predicate sets over a context snapshot, held
//! in a priority-sorted registry and scanned by a pure evaluator.

mod condition;
mod evaluator;
mod registry;
mod rule;

pub use condition::{
    ConditionError, ConditionKind, ConditionSet, HourRange, NumericCondition,
};
pub use evaluator::{evaluate, EvalError, RuleMatch};
pub use registry::{RuleError, RuleRegistry};
pub use rule::{EggDefinition, EggRule, LeveledQuip, PriorityTier};
