//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{HomePage, PricingPage, TemplatesPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <nav class="site-nav">
                <a href="/" class="brand">"Shiftwise"</a>
                <a href="/pricing">"Pricing"</a>
                <a href="/templates">"Templates"</a>
            </nav>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/templates") view=TemplatesPage />
                </Routes>
            </main>
        </Router>
    }
}
