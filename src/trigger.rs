//! Trigger events — the tab/group happenings that request a humor delivery
//!
//! One variant per event kind, each carrying its small typed payload.
//! The payload-free `TriggerKind` tag is what the bounded recent-event
//! history records, and `QuipCategory` is the key the generic fallback
//! pool is fetched by.

use serde::{Deserialize, Serialize};

/// An event that requests a humor delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A tab was opened.
    TabOpened,
    /// A tab was closed. `chance_close` marks closures made by the
    /// tab-roulette feature rather than the user directly.
    TabClosed { chance_close: bool },
    /// A tab group was created.
    GroupCreated,
    /// A tab group was removed.
    GroupRemoved,
}

impl Trigger {
    /// The payload-free tag for this trigger, recorded in event history.
    pub fn kind(&self) -> TriggerKind {
        match self {
            Self::TabOpened => TriggerKind::TabOpened,
            Self::TabClosed { chance_close: false } => TriggerKind::TabClosed,
            Self::TabClosed { chance_close: true } => TriggerKind::ChanceClose,
            Self::GroupCreated => TriggerKind::GroupCreated,
            Self::GroupRemoved => TriggerKind::GroupRemoved,
        }
    }

    /// The generic-pool category this trigger falls back to when no
    /// easter-egg rule matches.
    pub fn category(&self) -> QuipCategory {
        match self.kind() {
            TriggerKind::TabOpened => QuipCategory::TabOpened,
            TriggerKind::TabClosed => QuipCategory::TabClosed,
            TriggerKind::ChanceClose => QuipCategory::ChanceClose,
            TriggerKind::GroupCreated => QuipCategory::GroupCreated,
            TriggerKind::GroupRemoved => QuipCategory::GroupRemoved,
        }
    }
}

/// Payload-free tag identifying a trigger event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerKind {
    TabOpened,
    TabClosed,
    ChanceClose,
    GroupCreated,
    GroupRemoved,
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TabOpened => "tab-opened",
            Self::TabClosed => "tab-closed",
            Self::ChanceClose => "chance-close",
            Self::GroupCreated => "group-created",
            Self::GroupRemoved => "group-removed",
        };
        write!(f, "{}", s)
    }
}

/// Category key for the generic quip catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuipCategory {
    TabOpened,
    TabClosed,
    ChanceClose,
    GroupCreated,
    GroupRemoved,
}

impl std::fmt::Display for QuipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TabOpened => "tab-opened",
            Self::TabClosed => "tab-closed",
            Self::ChanceClose => "chance-close",
            Self::GroupCreated => "group-created",
            Self::GroupRemoved => "group-removed",
        };
        write!(f, "{}", s)
    }
}
