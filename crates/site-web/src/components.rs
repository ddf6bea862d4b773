//! Section Components
//!
//! Every section takes its copy as an `IndustryContent` prop plus a layout
//! `variant`, so the catalog can preview each one with sample data.

use leptos::prelude::*;
use site_core::content::{Industry, IndustryContent, Stat};
use site_core::plans::Plan;
use site_core::roi::format_currency;

use crate::analytics::{self, AnalyticsEvent};

fn section_class(base: &str, variant: &str, dark: bool) -> String {
    let mut class = format!("section {base}");
    if !variant.is_empty() {
        class.push_str(&format!(" {base}-{variant}"));
    }
    if dark {
        class.push_str(" dark");
    }
    class
}

#[component]
pub fn Hero(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("hero", &variant, dark);
    let (current, set_current) = signal(content);

    let switcher = (variant == "switcher").then(|| {
        view! {
            <div class="industry-tabs">
                {Industry::ALL
                    .into_iter()
                    .map(|industry| {
                        view! {
                            <button
                                class=move || {
                                    if current.with(|c| c.industry == industry) { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_current.set(industry.content())
                            >
                                {industry.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });
    let stats = (variant == "stats").then(|| view! { <StatRow stats=current.with_untracked(|c| c.stats.clone()) /> });

    view! {
        <header class=class>
            {switcher}
            <div class="hero-copy">
                <span class="eyebrow">{move || current.with(|c| c.industry.label())}</span>
                <h1>{move || current.with(|c| c.headline.clone())}</h1>
                <p class="subtitle">{move || current.with(|c| c.subheadline.clone())}</p>
                <div class="cta">
                    <a href="/pricing" class="btn btn-primary">{move || current.with(|c| c.cta.button.clone())}</a>
                    <a href="/templates" class="btn">"Browse templates"</a>
                </div>
            </div>
            {stats}
        </header>
    }
}

#[component]
pub fn StatRow(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="stats">
            {stats
                .into_iter()
                .map(|s| view! {
                    <div class="stat">
                        <span class="value">{s.value}</span>
                        <span class="label">{s.label}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FeatureGrid(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("features", &variant, dark);

    view! {
        <section class=class>
            <h2>"Built for " {content.industry.label()}</h2>
            <div class="feature-list">
                {content
                    .features
                    .into_iter()
                    .map(|f| view! {
                        <div class="feature">
                            <span class="icon">{f.icon}</span>
                            <h3>{f.title}</h3>
                            <p>{f.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn PricingTable(
    plans: Vec<Plan>,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("pricing", &variant, dark);
    let (annual, set_annual) = signal(true);
    let show_toggle = variant == "toggle" || variant == "tiers";

    let plans = if variant == "single" {
        plans.into_iter().filter(|p| p.highlighted).collect::<Vec<_>>()
    } else {
        plans
    };

    view! {
        <section class=class>
            <h2>"Simple per-location pricing"</h2>
            {show_toggle.then(|| view! {
                <label class="billing-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || annual.get()
                        on:change=move |ev| set_annual.set(event_target_checked(&ev))
                    />
                    "Bill annually (2 months free)"
                </label>
            })}
            <div class="plans">
                {plans
                    .into_iter()
                    .map(|plan| {
                        let plan_class = if plan.highlighted { "plan featured" } else { "plan" };
                        let monthly = plan.monthly_price;
                        let annual_equivalent = plan.annual_monthly_equivalent();
                        let price = move || {
                            let amount = if annual.get() { annual_equivalent } else { monthly };
                            amount.map_or_else(|| "Custom".to_string(), format_currency)
                        };
                        let button = if monthly.is_some() { "Choose plan" } else { "Contact sales" };
                        let plan_id = plan.id.clone();
                        view! {
                            <div class=plan_class>
                                {plan.highlighted.then(|| view! { <span class="badge">"Most popular"</span> })}
                                <h3>{plan.name}</h3>
                                <div class="price">{price}<span>"/location/month"</span></div>
                                <p class="blurb">{plan.blurb}</p>
                                <ul>
                                    {plan.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                                </ul>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| {
                                        analytics::track(&AnalyticsEvent::PlanClicked {
                                            plan: plan_id.clone(),
                                            annual: annual.get_untracked(),
                                        });
                                    }
                                >
                                    {button}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ContactForm(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("contact", &variant, dark);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<&'static str>::new());
    let (sent, set_sent) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let problems = contact_errors(&name.get(), &email.get(), &message.get());
        set_sent.set(problems.is_empty());
        set_errors.set(problems);
    };

    let heading = if variant == "demo" { "Book a demo" } else { "Get in touch" };

    view! {
        <section class=class>
            <h2>{heading}</h2>
            <p>{content.cta.body}</p>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="success">"Thanks! We'll be in touch within one business day."</p> }
            >
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Work email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="How can we help?"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    />
                    <ul class="form-errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                    <button type="submit" class="btn btn-primary">"Send"</button>
                </form>
            </Show>
        </section>
    }
}

/// Client-side checks for the contact form
fn contact_errors(name: &str, email: &str, message: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("Name is required");
    }
    let email = email.trim();
    if !(email.contains('@') && email.rsplit('@').next().is_some_and(|d| d.contains('.'))) {
        errors.push("Enter a valid email address");
    }
    if message.trim().len() < 10 {
        errors.push("Message must be at least 10 characters");
    }
    errors
}

#[component]
pub fn Testimonials(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("testimonials", &variant, dark);
    let mut quotes = content.testimonials;
    if variant == "featured" {
        quotes.truncate(1);
    }

    view! {
        <section class=class>
            <h2>"Loved by " {content.industry.label()}</h2>
            <div class="quotes">
                {quotes
                    .into_iter()
                    .map(|t| view! {
                        <blockquote class="quote">
                            <p>"\u{201c}" {t.quote} "\u{201d}"</p>
                            <footer>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </footer>
                        </blockquote>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("cta", &variant, dark);
    let is_newsletter = variant == "newsletter";

    view! {
        <section class=class>
            <h2>{content.cta.title}</h2>
            <p>{content.cta.body}</p>
            {if is_newsletter {
                view! {
                    <form class="newsletter" on:submit=|ev| ev.prevent_default()>
                        <input type="email" placeholder="you@restaurant.com" />
                        <button type="submit" class="btn btn-primary">"Subscribe"</button>
                    </form>
                }
                .into_any()
            } else {
                view! { <a href="/pricing" class="btn btn-primary">{content.cta.button}</a> }.into_any()
            }}
        </section>
    }
}

#[component]
pub fn Faq(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("faq", &variant, dark);
    let (open, set_open) = signal(None::<usize>);
    let (search, set_search) = signal(String::new());
    let searchable = variant == "search";
    let items = StoredValue::new(content.faqs);

    let visible = move || {
        let needle = search.get().trim().to_lowercase();
        items.with_value(|faqs| {
            faqs.iter()
                .enumerate()
                .filter(|(_, f)| {
                    needle.is_empty()
                        || f.question.to_lowercase().contains(&needle)
                        || f.answer.to_lowercase().contains(&needle)
                })
                .map(|(i, f)| (i, f.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class=class>
            <h2>"Frequently asked questions"</h2>
            {searchable.then(|| view! {
                <input
                    type="search"
                    placeholder="Search questions"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            })}
            <div class="faq-items">
                {move || visible()
                    .into_iter()
                    .map(|(i, item)| view! {
                        <div class="faq-item" class:open=move || open.get() == Some(i)>
                            <button
                                class="question"
                                on:click=move |_| set_open.update(|o| *o = if *o == Some(i) { None } else { Some(i) })
                            >
                                {item.question}
                            </button>
                            <Show when=move || open.get() == Some(i)>
                                <p class="answer">{item.answer.clone()}</p>
                            </Show>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn About(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("about", &variant, dark);

    view! {
        <section class=class>
            <h2>"Made by people who ran " {content.industry.label().to_lowercase()}</h2>
            <p>
                "We spent a decade on the line and behind the desk before writing a line of code. "
                "Everything we ship starts with a shift we worked."
            </p>
            <StatRow stats=content.stats />
        </section>
    }
}

#[component]
pub fn Bento(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("bento", &variant, dark);

    view! {
        <section class=class>
            <div class="bento-grid">
                <div class="tile tile-wide">
                    <h3>{content.headline}</h3>
                    <p>{content.subheadline}</p>
                </div>
                {content
                    .features
                    .into_iter()
                    .map(|f| view! {
                        <div class="tile">
                            <span class="icon">{f.icon}</span>
                            <h4>{f.title}</h4>
                        </div>
                    })
                    .collect_view()}
                {content
                    .stats
                    .into_iter()
                    .map(|s| view! {
                        <div class="tile tile-stat">
                            <span class="value">{s.value}</span>
                            <span class="label">{s.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

const COMPARISON_ROWS: [(&str, &str, &str); 5] = [
    ("Checklists", "Clipboards and binders", "Guided checks on any device"),
    ("Temperature logs", "Handwritten every 4 hours", "Recorded automatically"),
    ("Inspections", "Hunt for paperwork", "Export in one click"),
    ("Missed tasks", "Found after the fact", "Alerts in real time"),
    ("Multi-location view", "Phone calls and spreadsheets", "One dashboard"),
];

#[component]
pub fn Comparison(
    content: IndustryContent,
    #[prop(optional, into)] variant: String,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let class = section_class("compare", &variant, dark);
    let before = if variant == "competitors" { "Legacy tools" } else { "Before" };

    view! {
        <section class=class>
            <h2>"Why " {content.industry.label().to_lowercase()} " switch"</h2>
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <th>{before}</th>
                        <th>"With Shiftwise"</th>
                    </tr>
                </thead>
                <tbody>
                    {COMPARISON_ROWS
                        .into_iter()
                        .map(|(row, old, new)| view! {
                            <tr>
                                <th scope="row">{row}</th>
                                <td>{old}</td>
                                <td>{new}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_class() {
        assert_eq!(section_class("hero", "split", false), "section hero hero-split");
        assert_eq!(section_class("faq", "", true), "section faq dark");
    }

    #[test]
    fn test_contact_errors() {
        assert!(contact_errors("Ana", "ana@casa.com", "Need a demo for 3 sites").is_empty());

        let errors = contact_errors(" ", "ana@casa", "short");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[1], "Enter a valid email address");
    }
}
