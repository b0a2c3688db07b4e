/// Background service worker wiring
///
/// The glue forwards omnibox and tab events into the exported handlers here
/// and exposes the outbound Chrome calls as bridge functions. Everything
/// stateful lives on this side: the pending-injection registry is owned by
/// the worker instance and dies with it.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::inject::{InjectionOutcome, InjectionPlan};
use crate::pending::{PendingInjections, PendingRequest};
use crate::query::{normalize_query, suggestions_for};
use crate::tab_data::TabInfo;
use crate::target::{TARGET_URL, is_target_host};

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn navigateTab(tab_id: i32, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn runInjection(tab_id: i32, plan: JsValue, query: &str) -> Result<JsValue, JsValue>;
}

thread_local! {
    // One registry per worker instance. The worker is single-threaded, so a
    // thread local is the whole lifecycle story: created on start, dropped
    // when the browser tears the worker down.
    static PENDING: RefCell<PendingInjections> = RefCell::new(PendingInjections::new());
}

/// Suggestions for the current omnibox text, shaped for `suggest()`.
#[wasm_bindgen]
pub fn omnibox_suggestions(text: &str) -> JsValue {
    let suggestions = suggestions_for(text);
    serde_wasm_bindgen::to_value(&suggestions).unwrap_or(JsValue::NULL)
}

/// The user pressed Enter on an omnibox entry: navigate the active tab to
/// the chat page and queue the query for injection once the tab loads.
#[wasm_bindgen]
pub async fn omnibox_entered(text: String) {
    let query = normalize_query(&text);

    let Some(tab) = fetch_active_tab().await else {
        log::warn!("no active tab to navigate, dropping query");
        return;
    };

    let request = PendingRequest::new(query, TARGET_URL.to_string());
    log::info!("relay {}: navigating tab {} to {}", request.id, tab.id, TARGET_URL);

    if let Err(e) = navigateTab(tab.id, TARGET_URL).await {
        log::warn!("relay {}: navigation rejected: {:?}", request.id, e);
        return;
    }

    let displaced = PENDING.with(|p| p.borrow_mut().register(tab.id, request));
    if let Some(previous) = displaced {
        log::debug!(
            "relay {}: superseded by a newer query for tab {}",
            previous.id,
            tab.id
        );
    }
}

/// A tab changed state. Fires for every tab in the browser; only a tab with
/// a pending relay that just reported "complete" proceeds to injection, and
/// it does so exactly once per registration.
#[wasm_bindgen]
pub async fn tab_updated(tab_id: i32, status: Option<String>, url: Option<String>) {
    let taken = PENDING.with(|p| p.borrow_mut().take_completed(tab_id, status.as_deref()));
    let Some(request) = taken else {
        return;
    };

    if let Some(url) = url.as_deref() {
        if !is_target_host(url) {
            // Login or redirect page; the input poll and clipboard fallback
            // handle it, so still attempt the injection.
            log::warn!(
                "relay {}: tab {} completed on off-target url {}",
                request.id,
                tab_id,
                url
            );
        }
    }

    let plan = InjectionPlan::chat_input();
    let outcome = run_injection(tab_id, &plan, &request.query).await;
    match &outcome {
        InjectionOutcome::Submitted | InjectionOutcome::SubmitUnverified => {
            log::info!("relay {}: {}", request.id, outcome.describe());
        }
        InjectionOutcome::InputNotFound { .. } => {
            log::warn!("relay {}: {}", request.id, outcome.describe());
        }
        InjectionOutcome::Failed { .. } => {
            log::error!("relay {}: {}", request.id, outcome.describe());
        }
    }
}

/// A tab went away; drop any relay still waiting on it.
#[wasm_bindgen]
pub fn tab_removed(tab_id: i32) {
    let cancelled = PENDING.with(|p| p.borrow_mut().cancel(tab_id));
    if let Some(request) = cancelled {
        log::debug!(
            "relay {}: tab {} closed before load completed",
            request.id,
            tab_id
        );
    }
}

// Helper functions

async fn fetch_active_tab() -> Option<TabInfo> {
    let value = match getActiveTab().await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("active tab lookup failed: {:?}", e);
            return None;
        }
    };

    if value.is_null() || value.is_undefined() {
        return None;
    }

    match serde_wasm_bindgen::from_value(value) {
        Ok(tab) => Some(tab),
        Err(e) => {
            log::warn!("failed to parse active tab: {:?}", e);
            None
        }
    }
}

async fn run_injection(tab_id: i32, plan: &InjectionPlan, query: &str) -> InjectionOutcome {
    let plan_js = match serde_wasm_bindgen::to_value(plan) {
        Ok(value) => value,
        Err(e) => {
            return InjectionOutcome::Failed {
                error: format!("failed to serialize plan: {:?}", e),
            };
        }
    };

    match runInjection(tab_id, plan_js, query).await {
        Ok(result) => {
            let value: serde_json::Value =
                serde_wasm_bindgen::from_value(result).unwrap_or(serde_json::Value::Null);
            InjectionOutcome::from_result(&value)
        }
        Err(e) => InjectionOutcome::Failed {
            error: format!("{:?}", e),
        },
    }
}
