//! Analytics Events
//!
//! Events are written to the browser console as JSON; a tag manager picks
//! them up from there.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    CalculatorOpened,
    PlanClicked {
        plan: String,
        annual: bool,
    },
    TemplateFiltered {
        query: String,
        category: String,
        results: usize,
    },
}

pub fn track(event: &AnalyticsEvent) {
    match serde_json::to_string(event) {
        Ok(json) => leptos::logging::log!("analytics {json}"),
        Err(e) => leptos::logging::warn!("analytics event dropped: {e}"),
    }
}
