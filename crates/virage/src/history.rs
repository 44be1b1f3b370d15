//! The history seam: what the router records, the embedding environment
//! persists.
//!
//! The router never talks to the browser history directly. It hands every
//! entry it wants recorded to a [`HistorySink`], together with the visible
//! fragment identifier (`#route-key`) the address bar should show. On
//! back/forward, the environment feeds the recorded state back through
//! [`PageRouter::handle_pop`](crate::PageRouter::handle_pop).
use serde::{Deserialize, Serialize};

/// The state record attached to a history entry. Serializes to the exact
/// `{"page": "<route-key>"}` shape pushed to and consumed from the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: String,
}

impl HistoryEntry {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}

/// Receives history entries for navigations the router itself initiated.
///
/// `fragment` is the visible address fragment (`#route-key`) paired with the
/// entry. Implementations must not reload or re-enter the router; they only
/// persist.
pub trait HistorySink {
    fn push(&mut self, entry: &HistoryEntry, fragment: &str);
}

/// The visible address fragment for a route key.
pub fn fragment_for(page: &str) -> String {
    format!("#{}", page)
}
