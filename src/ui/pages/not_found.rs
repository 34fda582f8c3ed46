//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"404"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
