//! Top navigation bar
//!
//! Logo, menu, search box and the buttons that open the credential form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::FormMode;
use crate::ui::auth::use_session_context;

/// Navigation bar component
#[component]
pub fn Navbar(
    /// Callback opening the credential form in the given mode
    on_open_form: Callback<FormMode>,
) -> impl IntoView {
    let session = use_session_context();
    let query = RwSignal::new(String::new());

    view! {
        <nav class="navbar">
            <span class="navbar-left">
                <header>
                    <h1 class="logo">
                        <A href="/">
                            <span>"YOUNGCHA"</span>
                            <span>"PEDIA"</span>
                        </A>
                    </h1>
                </header>
                <ul class="nav-menu">
                    <li>"Movies"</li>
                </ul>
            </span>
            <span class="navbar-right">
                <input
                    type="search"
                    placeholder="Search titles, actors or directors"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Show
                    when=move || session.is_logged_in()
                    fallback=move || view! {
                        <button type="button" class="nav-button" on:click=move |_| on_open_form.run(FormMode::Login)>
                            "Log in"
                        </button>
                        <button type="button" class="nav-button" on:click=move |_| on_open_form.run(FormMode::SignUp)>
                            "Sign up"
                        </button>
                    }
                >
                    <button type="button" class="nav-button" on:click=move |_| session.logout()>
                        "Log out"
                    </button>
                </Show>
            </span>
        </nav>
    }
}
