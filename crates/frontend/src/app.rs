use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::{Router, A};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <nav class="app__nav">
                    <span class="app__brand">"CRM Dashboard"</span>
                    <A href="/">"Dashboard"</A>
                    <A href="/customers">"Customers"</A>
                    <A href="/deals">"Deals"</A>
                    <A href="/analytics">"Analytics"</A>
                </nav>
                <main class="app__main">
                    <AppRoutes />
                </main>
            </div>
        </Router>
    }
}
