//! Delivery outcomes — the unit returned to callers and broadcast to
//! subscribers
//!
//! One outcome per `deliver` call, whatever happened. "Not delivered"
//! because of the throttle is a normal outcome, not a failure.

use crate::rules::ConditionKind;
use crate::trigger::{QuipCategory, TriggerKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How the quip reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    /// Dispatched through the notification sink.
    Notification,
    /// Nothing was dispatched (throttled, no content, or sink refusal).
    None,
}

/// Why a delivery attempt produced no visible quip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryFailure {
    /// Neither the egg pool nor the category pool had anything to show.
    NoQuipsAvailable,
    /// The notification sink refused the message.
    DeliveryFailed { detail: String },
    /// Rule evaluation itself errored (authoring bug); the pipeline
    /// degraded to the generic path.
    EasterEggCheckFailed { detail: String },
}

/// The result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryOutcome {
    pub trigger: TriggerKind,
    pub category: QuipCategory,
    pub delivered: bool,
    pub text: Option<String>,
    /// Id of the matched easter-egg rule, when the quip came from one.
    pub matched_rule: Option<String>,
    /// Which predicate kinds contributed to the match.
    pub matched_conditions: Vec<ConditionKind>,
    pub method: DeliveryMethod,
    pub failure: Option<DeliveryFailure>,
    pub timestamp: DateTime<Utc>,
}

impl DeliveryOutcome {
    /// True when the quip came from an easter-egg rule.
    pub fn is_easter_egg(&self) -> bool {
        self.matched_rule.is_some()
    }

    /// True when nothing was shown because of the throttle window.
    pub fn is_throttled(&self) -> bool {
        !self.delivered && self.failure.is_none() && self.method == DeliveryMethod::None
    }
}
