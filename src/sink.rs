//! Notification sink seam — "deliver a message" and nothing more
//!
//! The engine hands the sink a display request and gets back a typed
//! success or failure. How the message is rendered (toast, badge, popup)
//! is the host's business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendering hint: easter-egg matches deliver as `Highlight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPriority {
    Normal,
    Highlight,
}

/// A display request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub priority: NotificationPriority,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            priority,
        }
    }
}

/// Downstream refusal to display.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("notification rejected: {detail}")]
    Rejected { detail: String },
}

/// Accepts display requests. The engine's second suspension point.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), SinkError>;
}
