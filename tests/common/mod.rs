//! Common test utilities for the humor-engine integration suites
//!
//! Mock collaborators (browser, clock, sink, failing store) and shared
//! content documents used across test files.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::{FailingStore, MockBrowser, MockClock, MockSink};

/// A small but representative content document: one legendary egg on an
/// exact tab count, one rare night egg, and generic pools for the
/// tab-closed and group-created categories.
pub const TEST_CONTENT: &str = r#"{
    "eggs": [
        {
            "id": "answer",
            "kind": "tab-milestone",
            "rarity": "legendary",
            "conditions": { "tab-count": { "exact": 42 } },
            "quips": [
                { "text": "Exactly 42 tabs. Don't panic.", "level": "mild" }
            ]
        },
        {
            "id": "midnight-hoarder",
            "kind": "night-owl",
            "rarity": "rare",
            "conditions": {
                "tab-count": { "range": { "min": 50 } },
                "hours": { "start": 22, "end": 4 }
            },
            "quips": [
                { "text": "50+ tabs after midnight. Bold strategy.", "level": "standard" }
            ]
        }
    ],
    "generic": [
        {
            "id": "close-1",
            "text": "Another one bites the dust.",
            "categories": ["tab-closed", "chance-close"],
            "level": "mild"
        },
        {
            "id": "close-2",
            "text": "That tab had a family.",
            "categories": ["tab-closed"],
            "level": "standard"
        },
        {
            "id": "group-1",
            "text": "A new group is born.",
            "categories": ["group-created"],
            "level": "mild"
        }
    ]
}"#;
