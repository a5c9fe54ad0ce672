//! Mock collaborator implementations

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use levity::{
    ActiveTab, BrowserState, Clock, ContentCatalog, ContentError, ContentStore, Intensity,
    Notification, NotificationSink, QuipCategory, SinkError,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Browser state with settable fields.
#[derive(Debug, Default)]
pub struct MockBrowser {
    tab_count: Mutex<u32>,
    group_count: Mutex<u32>,
    active_tab: Mutex<Option<ActiveTab>>,
}

impl MockBrowser {
    pub fn new(tab_count: u32, group_count: u32) -> Self {
        Self {
            tab_count: Mutex::new(tab_count),
            group_count: Mutex::new(group_count),
            active_tab: Mutex::new(None),
        }
    }

    pub fn set_tab_count(&self, count: u32) {
        *self.tab_count.lock().unwrap() = count;
    }

    pub fn set_group_count(&self, count: u32) {
        *self.group_count.lock().unwrap() = count;
    }

    pub fn set_active_tab(&self, tab: Option<ActiveTab>) {
        *self.active_tab.lock().unwrap() = tab;
    }
}

impl BrowserState for MockBrowser {
    fn tab_count(&self) -> u32 {
        *self.tab_count.lock().unwrap()
    }

    fn group_count(&self) -> u32 {
        *self.group_count.lock().unwrap()
    }

    fn active_tab(&self) -> Option<ActiveTab> {
        self.active_tab.lock().unwrap().clone()
    }
}

/// Steppable clock pinned to a fixed instant and hour.
#[derive(Debug)]
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
    hour: Mutex<u32>,
}

impl MockClock {
    pub fn at_hour(hour: u32) -> Self {
        Self {
            now: Mutex::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            hour: Mutex::new(hour),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }

    pub fn set_hour(&self, hour: u32) {
        *self.hour.lock().unwrap() = hour;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }

    fn local_hour(&self) -> u32 {
        *self.hour.lock().unwrap()
    }
}

/// Sink that records every notification; can be told to reject.
#[derive(Debug, Default)]
pub struct MockSink {
    pub sent: Mutex<Vec<Notification>>,
    fail: AtomicBool,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<Notification> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl NotificationSink for MockSink {
    async fn notify(&self, notification: Notification) -> Result<(), SinkError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(SinkError::Rejected {
                detail: "renderer offline".to_string(),
            });
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Store whose every query reports unavailability.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl ContentStore for FailingStore {
    async fn load_definitions(&self) -> Result<ContentCatalog, ContentError> {
        Err(ContentError::Unavailable {
            detail: "store offline".to_string(),
        })
    }

    async fn egg_quips(
        &self,
        _kind: &str,
        _intensity: Intensity,
    ) -> Result<Vec<String>, ContentError> {
        Err(ContentError::Unavailable {
            detail: "store offline".to_string(),
        })
    }

    async fn category_quips(
        &self,
        _category: QuipCategory,
        _intensity: Intensity,
    ) -> Result<Vec<String>, ContentError> {
        Err(ContentError::Unavailable {
            detail: "store offline".to_string(),
        })
    }
}
