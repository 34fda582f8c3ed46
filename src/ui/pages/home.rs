//! Home page component

use leptos::prelude::*;
use leptos_meta::Title;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="YoungchaPedia"/>
        <section class="home">
            <h2>"Discover your next favourite movie"</h2>
            <p>"Log in to rate movies and read what others think."</p>
        </section>
    }
}
