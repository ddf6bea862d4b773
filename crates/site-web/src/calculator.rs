//! ROI Calculator Component
//!
//! Recomputes on every edit. Each field keeps its own text so a half-typed
//! number like "12." isn't rewritten under the cursor.

use leptos::prelude::*;
use site_core::roi::{self, format_currency, format_months, format_percent, RawRoiInputs, RoiField, RoiInputs};

use crate::analytics::{self, AnalyticsEvent};

/// Catalog previews render the calculator too; only a real visit counts
fn opened_event(preview: bool) -> Option<AnalyticsEvent> {
    (!preview).then_some(AnalyticsEvent::CalculatorOpened)
}

#[component]
pub fn RoiCalculator(
    #[prop(optional)] dark: bool,
    #[prop(optional)] preview: bool,
) -> impl IntoView {
    if let Some(event) = opened_event(preview) {
        analytics::track(&event);
    }

    let defaults = RawRoiInputs::default();
    let texts: [RwSignal<String>; 7] =
        RoiField::ALL.map(|field| RwSignal::new(defaults.get(field).to_string()));

    let raw = Memo::new(move |_| {
        let mut raw = RawRoiInputs::default();
        for (field, text) in RoiField::ALL.into_iter().zip(texts) {
            raw.set_text(field, &text.get());
        }
        raw
    });
    let validation = Memo::new(move |_| roi::validate(&raw.get()));
    let summary = Memo::new(move |_| {
        RoiInputs::try_from(raw.get())
            .ok()
            .map(|inputs| roi::calculate(&inputs).summary())
    });

    let class = if dark { "roi-calculator dark" } else { "roi-calculator" };

    view! {
        <section class=class>
            <h2>"Estimate your savings"</h2>
            <form class="roi-form" on:submit=|ev| ev.prevent_default()>
                {RoiField::ALL
                    .into_iter()
                    .zip(texts)
                    .map(|(field, text)| {
                        let (min, max) = field.range();
                        let error = move || {
                            validation.with(|v| v.error_for(field).map(|e| e.message.clone()))
                        };
                        view! {
                            <label class="field">
                                <span class="label">{field.label()}</span>
                                <input
                                    type="number"
                                    name=field.id()
                                    min=min.to_string()
                                    max=max.to_string()
                                    step=field.step().to_string()
                                    class=move || if error().is_some() { "invalid" } else { "" }
                                    prop:value=move || text.get()
                                    on:input=move |ev| text.set(event_target_value(&ev))
                                />
                                {move || error().map(|msg| view! { <span class="field-error">{msg}</span> })}
                            </label>
                        }
                    })
                    .collect_view()}
            </form>

            {move || match summary.get() {
                Some(s) => view! {
                    <div class="roi-results">
                        <p class="headline">{s.headline()}</p>
                        <dl>
                            <dt>"Current weekly labor cost"</dt>
                            <dd>{format_currency(s.current_weekly_cost)}</dd>
                            <dt>"Projected weekly cost"</dt>
                            <dd>{format_currency(s.improved_weekly_cost)}</dd>
                            <dt>"Weekly savings"</dt>
                            <dd>{format_currency(s.weekly_savings)}</dd>
                            <dt>"Annual savings"</dt>
                            <dd class="highlight">{format_currency(s.annual_savings)}</dd>
                            <dt>"Annual subscription"</dt>
                            <dd>{format_currency(s.annual_cost)}</dd>
                            <dt>"ROI"</dt>
                            <dd>{format_percent(s.roi_percentage)}</dd>
                            <dt>"Payback period"</dt>
                            <dd>{format_months(s.payback_months)}</dd>
                        </dl>
                        <p class="fine-print">
                            "Assumes a " {(roi::EFFICIENCY_GAIN * 100.0).round()} "% reduction in time spent on tracked tasks."
                        </p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p class="roi-pending">"Fix the highlighted fields to see your savings."</p>
                }
                .into_any(),
            }}
        </section>
    }
}
