//! Tab collaborator seam — the view of the browser the engine reads
//!
//! Context assembly must never suspend, so this trait is synchronous:
//! implementations hand back state they already hold (the host add-on
//! mirrors tab events into it as they arrive).

use serde::{Deserialize, Serialize};

/// Descriptor of the currently active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTab {
    pub url: String,
    pub title: String,
    /// Host portion of the URL, pre-extracted by the collaborator.
    pub domain: String,
}

impl ActiveTab {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            domain: domain.into(),
        }
    }
}

/// The browser state supplied by the host add-on.
///
/// All three accessors are point-in-time reads; there is no active tab
/// when the window has none focused (e.g. during startup).
pub trait BrowserState: Send + Sync {
    fn tab_count(&self) -> u32;
    fn group_count(&self) -> u32;
    fn active_tab(&self) -> Option<ActiveTab>;
}
