//! Predicate variants and their evaluation semantics
//!
//! A rule's conditions are an AND-combined set of optional predicates.
//! An absent predicate never constrains. Domain and title predicates
//! only constrain when the context actually has an active tab.

use crate::context::ContextSnapshot;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A numeric predicate over an integer context field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumericCondition {
    /// Matches exactly one value.
    Exact(i64),
    /// Inclusive range; either bound may be open.
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    /// Matches positive multiples of the divisor. Zero is not a multiple
    /// here ("every 10th tab" must not fire on an empty browser), and a
    /// non-positive divisor never matches.
    MultipleOf(i64),
}

impl NumericCondition {
    pub fn matches(&self, value: i64) -> bool {
        match self {
            Self::Exact(expected) => value == *expected,
            Self::Range { min, max } => {
                min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
            }
            Self::MultipleOf(divisor) => *divisor > 0 && value > 0 && value % divisor == 0,
        }
    }
}

/// An inclusive hour-of-day window. `start > end` wraps past midnight:
/// (22, 4) covers 22:00–23:59 and 00:00–04:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            hour >= self.start && hour <= self.end
        } else {
            hour >= self.start || hour <= self.end
        }
    }
}

/// Which predicate kinds a rule carries / contributed to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionKind {
    TabCount,
    GroupCount,
    Hours,
    Domain,
    Title,
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TabCount => "tab-count",
            Self::GroupCount => "group-count",
            Self::Hours => "hours",
            Self::Domain => "domain",
            Self::Title => "title",
        };
        write!(f, "{}", s)
    }
}

/// Error from evaluating a predicate against a context.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// The domain pattern does not compile. A broken rule silently never
    /// firing is a correctness hazard, so this surfaces as an error
    /// rather than a non-match.
    #[error("invalid domain pattern {pattern:?}: {source}")]
    InvalidDomainPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// AND-combined predicate set. Every field is optional; an absent field
/// is always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConditionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_count: Option<NumericCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<NumericCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<HourRange>,
    /// Case-insensitive regex tested against the active tab's domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_pattern: Option<String>,
    /// Case-insensitive substring tested against the active tab's title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_contains: Option<String>,
}

impl ConditionSet {
    /// True when no predicate is present. A rule with an empty set would
    /// match everything and is rejected at registration.
    pub fn is_empty(&self) -> bool {
        self.tab_count.is_none()
            && self.group_count.is_none()
            && self.hours.is_none()
            && self.domain_pattern.is_none()
            && self.title_contains.is_none()
    }

    /// The kinds of predicates present in this set.
    pub fn kinds(&self) -> Vec<ConditionKind> {
        let mut kinds = Vec::new();
        if self.tab_count.is_some() {
            kinds.push(ConditionKind::TabCount);
        }
        if self.group_count.is_some() {
            kinds.push(ConditionKind::GroupCount);
        }
        if self.hours.is_some() {
            kinds.push(ConditionKind::Hours);
        }
        if self.domain_pattern.is_some() {
            kinds.push(ConditionKind::Domain);
        }
        if self.title_contains.is_some() {
            kinds.push(ConditionKind::Title);
        }
        kinds
    }

    /// Evaluate every present predicate against the context.
    ///
    /// Returns the kinds that held when all of them did, `None` when any
    /// failed. Short-circuits on the first failing predicate.
    pub fn evaluate(
        &self,
        context: &ContextSnapshot,
    ) -> Result<Option<Vec<ConditionKind>>, ConditionError> {
        let mut matched = Vec::new();

        if let Some(condition) = &self.tab_count {
            if !condition.matches(i64::from(context.tab_count)) {
                return Ok(None);
            }
            matched.push(ConditionKind::TabCount);
        }

        if let Some(condition) = &self.group_count {
            if !condition.matches(i64::from(context.group_count)) {
                return Ok(None);
            }
            matched.push(ConditionKind::GroupCount);
        }

        if let Some(range) = &self.hours {
            if !range.contains(context.current_hour) {
                return Ok(None);
            }
            matched.push(ConditionKind::Hours);
        }

        // Domain and title constrain only when an active tab exists.
        if let Some(pattern) = &self.domain_pattern {
            if let Some(domain) = context.active_domain() {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ConditionError::InvalidDomainPattern {
                        pattern: pattern.clone(),
                        source,
                    })?;
                if !re.is_match(domain) {
                    return Ok(None);
                }
                matched.push(ConditionKind::Domain);
            }
        }

        if let Some(needle) = &self.title_contains {
            if let Some(title) = context.active_title() {
                if !title.to_lowercase().contains(&needle.to_lowercase()) {
                    return Ok(None);
                }
                matched.push(ConditionKind::Title);
            }
        }

        Ok(Some(matched))
    }
}
