//! Humor orchestrator — the delivery pipeline coordinator
//!
//! Drives one trigger through snapshot → rule evaluation → pool fetch →
//! dedup-aware selection → throttle → notification dispatch, then
//! broadcasts the outcome. `deliver` never fails: everything that can go
//! wrong degrades to a "nothing shown" outcome so the host feature that
//! fired the trigger is never disrupted.

use super::dedup::RecentHistory;
use super::outcome::{DeliveryFailure, DeliveryMethod, DeliveryOutcome};
use super::selector::select_quip;
use super::subscribers::{OutcomeStream, SubscriberRegistry, SubscriptionId};
use super::throttle::ThrottleGate;
use crate::browser::BrowserState;
use crate::clock::{Clock, SystemClock};
use crate::content::{ContentStore, Intensity};
use crate::context::SnapshotBuilder;
use crate::rules::{evaluate, RuleError, RuleRegistry};
use crate::sink::{Notification, NotificationPriority, NotificationSink};
use crate::trigger::Trigger;
use chrono::Duration;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, error, warn};

/// Engine tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EngineConfig {
    /// Active humor intensity tier.
    pub intensity: Intensity,
    /// Minimum interval between deliveries, in milliseconds.
    pub min_interval_ms: u64,
    /// How many delivered texts the dedup history remembers.
    pub history_capacity: usize,
    /// How many trigger kinds the context snapshot's event history keeps.
    pub recent_events_capacity: usize,
    /// Title line for dispatched notifications.
    pub notification_title: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            intensity: Intensity::Standard,
            min_interval_ms: 5_000,
            history_capacity: 10,
            recent_events_capacity: 16,
            notification_title: "Levity".to_string(),
        }
    }
}

/// The shared mutable delivery state. Throttle and history live behind
/// one lock so no pipeline observes one updated without the other.
#[derive(Debug)]
struct DeliveryState {
    history: RecentHistory,
    throttle: ThrottleGate,
}

/// The pipeline coordinator.
pub struct HumorEngine {
    store: Arc<dyn ContentStore>,
    sink: Arc<dyn NotificationSink>,
    browser: Arc<dyn BrowserState>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    registry: RwLock<RuleRegistry>,
    events: Mutex<SnapshotBuilder>,
    state: Mutex<DeliveryState>,
    rng: Mutex<StdRng>,
    subscribers: SubscriberRegistry,
}

impl HumorEngine {
    pub fn new(
        store: Arc<dyn ContentStore>,
        sink: Arc<dyn NotificationSink>,
        browser: Arc<dyn BrowserState>,
        config: EngineConfig,
    ) -> Self {
        let state = DeliveryState {
            history: RecentHistory::new(config.history_capacity),
            throttle: ThrottleGate::new(Duration::milliseconds(config.min_interval_ms as i64)),
        };
        Self {
            store,
            sink,
            browser,
            clock: Arc::new(SystemClock),
            events: Mutex::new(SnapshotBuilder::new(config.recent_events_capacity)),
            state: Mutex::new(state),
            rng: Mutex::new(StdRng::from_entropy()),
            subscribers: SubscriberRegistry::new(),
            registry: RwLock::new(RuleRegistry::new()),
            config,
        }
    }

    /// Replace the clock. Tests pin or step time through this.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seed the selection rng for deterministic tests.
    pub fn with_rng_seed(self, seed: u64) -> Self {
        *self.rng.lock().unwrap() = StdRng::seed_from_u64(seed);
        self
    }

    /// Load the rule registry from the content store.
    ///
    /// Reported once; no retry. A failed load leaves the engine running
    /// with generic quips only; the caller decides whether that aborts
    /// startup.
    pub async fn init(&self) -> Result<usize, RuleError> {
        let registry = RuleRegistry::load(self.store.as_ref()).await?;
        let count = registry.len();
        *self.registry.write().unwrap() = registry;
        debug!(rules = count, "humor engine initialized");
        Ok(count)
    }

    /// Open an outcome subscription.
    pub fn subscribe(&self) -> OutcomeStream {
        self.subscribers.subscribe()
    }

    /// Close an outcome subscription. Idempotent.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one trigger through the delivery pipeline.
    ///
    /// Every path produces an outcome; the outcome is broadcast to
    /// subscribers before it is returned.
    pub async fn deliver(&self, trigger: Trigger) -> DeliveryOutcome {
        let kind = trigger.kind();
        let category = trigger.category();

        // Snapshot assembly is synchronous: no other pipeline can
        // interleave before evaluation.
        let snapshot = {
            let mut events = self.events.lock().unwrap();
            events.record(kind);
            events.build(self.browser.as_ref(), self.clock.as_ref())
        };
        debug!(
            trigger = %kind,
            tabs = snapshot.tab_count,
            groups = snapshot.group_count,
            hour = snapshot.current_hour,
            "delivery triggered"
        );

        let mut outcome = DeliveryOutcome {
            trigger: kind,
            category,
            delivered: false,
            text: None,
            matched_rule: None,
            matched_conditions: Vec::new(),
            method: DeliveryMethod::None,
            failure: None,
            timestamp: self.clock.now(),
        };

        let rule_match = {
            let registry = self.registry.read().unwrap();
            match evaluate(&snapshot, &registry) {
                Ok(result) => result,
                Err(e) => {
                    // Authoring bug: loud for developers, silent for the
                    // user. Fall through to the generic pool.
                    error!(error = %e, "easter-egg check failed");
                    outcome.failure = Some(DeliveryFailure::EasterEggCheckFailed {
                        detail: e.to_string(),
                    });
                    None
                }
            }
        };

        // Matched egg first; an empty or unavailable egg pool falls
        // through to the generic pool rather than failing.
        let mut pool = Vec::new();
        if let Some(matched) = rule_match {
            match self
                .store
                .egg_quips(&matched.kind, self.config.intensity)
                .await
            {
                Ok(quips) if !quips.is_empty() => {
                    pool = quips;
                    outcome.matched_rule = Some(matched.rule_id);
                    outcome.matched_conditions = matched.matched;
                }
                Ok(_) => {
                    debug!(rule = %matched.rule_id, "egg pool empty, using generic pool");
                }
                Err(e) => {
                    warn!(rule = %matched.rule_id, error = %e, "egg pool fetch failed");
                }
            }
        }
        if pool.is_empty() {
            match self
                .store
                .category_quips(category, self.config.intensity)
                .await
            {
                Ok(quips) => pool = quips,
                Err(e) => {
                    warn!(category = %category, error = %e, "generic pool fetch failed");
                }
            }
        }

        if pool.is_empty() {
            outcome.failure = Some(DeliveryFailure::NoQuipsAvailable);
            return self.finish(outcome);
        }

        let selected = {
            let state = self.state.lock().unwrap();
            let mut rng = self.rng.lock().unwrap();
            select_quip(&pool, &state.history, &mut *rng)
        };
        let text = match selected {
            Some(text) => text,
            None => {
                outcome.failure = Some(DeliveryFailure::NoQuipsAvailable);
                return self.finish(outcome);
            }
        };

        // Throttle check does not consume anything; a throttled attempt
        // leaves the dedup history untouched.
        let now = self.clock.now();
        if !self.state.lock().unwrap().throttle.admit(now) {
            debug!(trigger = %kind, "delivery throttled");
            return self.finish(outcome);
        }

        let priority = if outcome.matched_rule.is_some() {
            NotificationPriority::Highlight
        } else {
            NotificationPriority::Normal
        };
        let notification =
            Notification::new(self.config.notification_title.clone(), text.clone(), priority);

        match self.sink.notify(notification).await {
            Ok(()) => {
                // History and throttle move together under one lock.
                let now = self.clock.now();
                {
                    let mut state = self.state.lock().unwrap();
                    state.history.insert(text.clone());
                    state.throttle.record(now);
                }
                outcome.delivered = true;
                outcome.text = Some(text);
                outcome.method = DeliveryMethod::Notification;
                outcome.timestamp = now;
                self.finish(outcome)
            }
            Err(e) => {
                warn!(error = %e, "notification sink rejected delivery");
                outcome.failure = Some(DeliveryFailure::DeliveryFailed {
                    detail: e.to_string(),
                });
                self.finish(outcome)
            }
        }
    }

    fn finish(&self, outcome: DeliveryOutcome) -> DeliveryOutcome {
        self.subscribers.broadcast(&outcome);
        outcome
    }
}
