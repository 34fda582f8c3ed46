//! Review page component
//!
//! Where users land after logging in.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::use_session_context;

/// Review page component
#[component]
pub fn ReviewPage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <Title text="Reviews - YoungchaPedia"/>
        <section class="review">
            <h2>"Reviews"</h2>
            {move || {
                if session.is_logged_in() {
                    view! { <p>"Welcome back! Rate the movies you have watched."</p> }.into_any()
                } else {
                    view! { <p>"Log in to start rating movies."</p> }.into_any()
                }
            }}
        </section>
    }
}
