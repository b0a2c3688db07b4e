/// Data structures for Prompt Relay
use serde::{Deserialize, Serialize};

/// Information about a browser tab, as returned by the active-tab lookup in
/// the glue. The lookup yields nothing when no tab is active or the tab has
/// no id, so an id is always present here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub window_id: i32,
}

impl TabInfo {
    pub fn new(id: i32, url: String, title: String, active: bool, window_id: i32) -> TabInfo {
        TabInfo {
            id,
            url,
            title,
            active,
            window_id,
        }
    }
}
