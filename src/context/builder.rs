//! Snapshot assembly from collaborator state
//!
//! Pure assembly of data the collaborators already hold — no I/O and no
//! suspension. The builder's only state is the bounded event ring.

use super::snapshot::ContextSnapshot;
use crate::browser::BrowserState;
use crate::clock::Clock;
use crate::trigger::TriggerKind;
use std::collections::VecDeque;

/// Assembles context snapshots and tracks recent trigger history.
#[derive(Debug)]
pub struct SnapshotBuilder {
    /// Most recent event at the front.
    recent: VecDeque<TriggerKind>,
    capacity: usize,
}

impl SnapshotBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a trigger kind at the front of the history, evicting the
    /// oldest entry past capacity.
    pub fn record(&mut self, kind: TriggerKind) {
        self.recent.push_front(kind);
        while self.recent.len() > self.capacity {
            self.recent.pop_back();
        }
    }

    /// Build a snapshot from current collaborator state.
    pub fn build(&self, browser: &dyn BrowserState, clock: &dyn Clock) -> ContextSnapshot {
        ContextSnapshot {
            tab_count: browser.tab_count(),
            active_tab: browser.active_tab(),
            current_hour: clock.local_hour(),
            recent_events: self.recent.iter().copied().collect(),
            group_count: browser.group_count(),
        }
    }

    pub fn recent_events(&self) -> impl Iterator<Item = &TriggerKind> {
        self.recent.iter()
    }
}
