/// Pending-injection registry: one outstanding relay request per tab

use std::collections::HashMap;

use uuid::Uuid;

/// Tab status string reported by `tabs.onUpdated` once a page finished loading.
const STATUS_COMPLETE: &str = "complete";

/// A relay request waiting for its tab to finish loading.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    /// Correlation id tying together the log lines of one relay attempt.
    pub id: Uuid,
    pub query: String,
    pub target_url: String,
}

impl PendingRequest {
    pub fn new(query: String, target_url: String) -> PendingRequest {
        PendingRequest {
            id: Uuid::new_v4(),
            query,
            target_url,
        }
    }
}

/// Registry of pending injections, keyed by tab id.
///
/// Owned by the background context for the life of the service worker. A tab
/// holds at most one entry: an entry is resolved by `take_completed` when its
/// tab finishes loading, replaced by a newer `register` for the same tab, or
/// cancelled when the tab goes away.
#[derive(Debug, Default)]
pub struct PendingInjections {
    requests: HashMap<i32, PendingRequest>,
}

impl PendingInjections {
    pub fn new() -> Self {
        PendingInjections {
            requests: HashMap::new(),
        }
    }

    /// Register a request for a tab, returning any request it displaced.
    pub fn register(&mut self, tab_id: i32, request: PendingRequest) -> Option<PendingRequest> {
        self.requests.insert(tab_id, request)
    }

    /// Remove and return the tab's request, but only when the tab reported a
    /// "complete" status. Any other status (including none) leaves the
    /// registry untouched, so a single registration yields at most one take.
    pub fn take_completed(&mut self, tab_id: i32, status: Option<&str>) -> Option<PendingRequest> {
        if status != Some(STATUS_COMPLETE) {
            return None;
        }
        self.requests.remove(&tab_id)
    }

    /// Drop a tab's request without injecting (tab closed mid-load).
    pub fn cancel(&mut self, tab_id: i32) -> Option<PendingRequest> {
        self.requests.remove(&tab_id)
    }

    pub fn is_pending(&self, tab_id: i32) -> bool {
        self.requests.contains_key(&tab_id)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Teardown on worker shutdown.
    pub fn clear(&mut self) {
        self.requests.clear();
    }
}
