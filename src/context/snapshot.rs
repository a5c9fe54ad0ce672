//! The immutable context value rules are evaluated against

use crate::browser::ActiveTab;
use crate::trigger::TriggerKind;
use serde::Serialize;

/// Point-in-time view of the browsing environment.
///
/// Created fresh for every trigger, never mutated, dropped after one
/// evaluation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ContextSnapshot {
    pub tab_count: u32,
    pub active_tab: Option<ActiveTab>,
    /// Local hour of day, 0–23.
    pub current_hour: u32,
    /// Recent trigger kinds, most recent first, bounded by the builder.
    pub recent_events: Vec<TriggerKind>,
    pub group_count: u32,
}

impl ContextSnapshot {
    /// Domain of the active tab, if there is one.
    pub fn active_domain(&self) -> Option<&str> {
        self.active_tab.as_ref().map(|t| t.domain.as_str())
    }

    /// Title of the active tab, if there is one.
    pub fn active_title(&self) -> Option<&str> {
        self.active_tab.as_ref().map(|t| t.title.as_str())
    }
}
