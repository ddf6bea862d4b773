//! Template Catalog Page
//!
//! Every section with sample props, searchable and grouped by category for
//! design review.

use leptos::prelude::*;
use site_core::catalog::{
    template_catalog, CatalogQuery, CategoryFilter, SortKey, TemplateEntry,
};

use crate::analytics::{self, AnalyticsEvent};
use crate::preview::render_template;

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let catalog = StoredValue::new(template_catalog());
    let counts = catalog.with_value(|c| c.counts());
    let tabs: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(catalog.with_value(|c| c.categories()).into_iter().map(CategoryFilter::Only))
        .collect();

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let (sort_key, set_sort_key) = signal(SortKey::default());

    let query = Memo::new(move |_| CatalogQuery {
        text: search.get(),
        category: category.get(),
    });
    let results = Memo::new(move |_| {
        query.with(|q| {
            catalog.with_value(|c| {
                c.query(q, sort_key.get())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<TemplateEntry>>()
            })
        })
    });

    Effect::new(move |_| {
        let (text, category) = query.with(|q| (q.text.clone(), q.category.to_string()));
        analytics::track(&AnalyticsEvent::TemplateFiltered {
            query: text,
            category,
            results: results.with(Vec::len),
        });
    });

    view! {
        <div class="templates-page">
            <header>
                <h1>"Template catalog"</h1>
                <p class="subtitle">
                    {catalog.with_value(|c| c.len())} " sections, rendered with sample content"
                </p>
            </header>

            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search templates"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Ok(key) = event_target_value(&ev).parse::<SortKey>() {
                        set_sort_key.set(key);
                    }
                }>
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! {
                            <option value=key.as_str() selected=move || sort_key.get() == key>
                                {key.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="category-tabs">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let label = match &tab {
                            CategoryFilter::All => "All".to_string(),
                            CategoryFilter::Only(c) => c.label().to_string(),
                            CategoryFilter::Unknown(name) => name.clone(),
                        };
                        let count = counts.get(&tab);
                        let selected = tab.clone();
                        view! {
                            <button
                                class=move || if category.get() == selected { "tab active" } else { "tab" }
                                on:click=move |_| set_category.set(tab.clone())
                            >
                                {label}
                                <span class="count">{count}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| view! { <p class="empty">"No templates match your search."</p> }
            >
                <div class="template-grid">
                    <For
                        each=move || results.get()
                        key=|entry| entry.id
                        children=move |entry| view! { <TemplateCard entry=entry /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TemplateCard(entry: TemplateEntry) -> impl IntoView {
    let preview = render_template(entry.render, &entry.props);

    view! {
        <article class="template-card">
            <header>
                <h3>{entry.title}</h3>
                <span class="badge">{entry.category.label()}</span>
            </header>
            <p class="description">{entry.description}</p>
            <div class="preview">{preview}</div>
        </article>
    }
}
