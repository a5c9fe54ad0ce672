//! Levity: context-triggered humor delivery for a tab-management add-on
//!
//! Watches tab/group trigger events and, within throttle and dedup
//! policy, emits a short quip matched either to a situational easter-egg
//! rule or to a category fallback pool.
//!
//! # Core Concepts
//!
//! - **Triggers**: tab/group events that request a delivery attempt
//! - **Rules**: priority-tiered AND-predicate easter eggs over a context
//!   snapshot
//! - **Delivery**: dedup-aware selection, minimum-interval throttling,
//!   and outcome broadcast to subscribers
//!
//! # Example
//!
//! ```no_run
//! use levity::{EngineConfig, HumorEngine, StaticContentStore, Trigger};
//! use std::sync::Arc;
//!
//! # use levity::{ActiveTab, BrowserState, Notification, NotificationSink, SinkError};
//! # struct Tabs;
//! # impl BrowserState for Tabs {
//! #     fn tab_count(&self) -> u32 { 1 }
//! #     fn group_count(&self) -> u32 { 0 }
//! #     fn active_tab(&self) -> Option<ActiveTab> { None }
//! # }
//! # struct Toast;
//! # #[async_trait::async_trait]
//! # impl NotificationSink for Toast {
//! #     async fn notify(&self, _n: Notification) -> Result<(), SinkError> { Ok(()) }
//! # }
//! # async fn run() {
//! let store = Arc::new(StaticContentStore::new());
//! store.load_json(include_str!("../content/quips.json")).unwrap();
//!
//! let engine = HumorEngine::new(store, Arc::new(Toast), Arc::new(Tabs), EngineConfig::default());
//! engine.init().await.unwrap();
//!
//! let outcome = engine.deliver(Trigger::GroupCreated).await;
//! println!("delivered: {}", outcome.delivered);
//! # }
//! ```

pub mod browser;
pub mod clock;
pub mod content;
pub mod context;
pub mod delivery;
pub mod rules;
pub mod sink;
pub mod trigger;

pub use browser::{ActiveTab, BrowserState};
pub use clock::{Clock, SystemClock};
pub use content::{
    ContentCatalog, ContentError, ContentStore, GenericQuip, Intensity, StaticContentStore,
};
pub use context::{ContextSnapshot, SnapshotBuilder};
pub use delivery::{
    DeliveryFailure, DeliveryMethod, DeliveryOutcome, EngineConfig, HumorEngine, OutcomeStream,
    RecentHistory, SubscriptionId, ThrottleGate,
};
pub use rules::{
    evaluate, ConditionKind, ConditionSet, EggDefinition, EggRule, EvalError, HourRange,
    LeveledQuip, NumericCondition, PriorityTier, RuleError, RuleMatch, RuleRegistry,
};
pub use sink::{Notification, NotificationPriority, NotificationSink, SinkError};
pub use trigger::{QuipCategory, Trigger, TriggerKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
