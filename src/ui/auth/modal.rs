//! Credential modal
//!
//! Hosts [`CredentialForm`] and wires its callbacks to the session context and
//! the router.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::credential_form::CredentialForm;
use super::session::use_session_context;
use crate::core::{FormMode, SubmissionOutcome};
use crate::ui::notifications::use_notifications;

/// Path opened after a successful login
pub const AFTER_LOGIN_PATH: &str = "/review";

/// Modal showing the login / sign-up form while `form_mode` is set
#[component]
pub fn CredentialModal(
    /// Open mode of the modal, `None` when closed
    form_mode: RwSignal<Option<FormMode>>,
) -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();

    let on_login_success = Callback::new(move |token: String| {
        session.store(&token);
        session.refresh();
    });

    let on_navigate = Callback::new(move |_: ()| {
        form_mode.set(None);
        let navigate = use_navigate();
        navigate(AFTER_LOGIN_PATH, Default::default());
    });

    let close = Callback::new(move |_: ()| form_mode.set(None));
    let on_mode_change = Callback::new(move |mode: FormMode| form_mode.set(Some(mode)));
    let on_success = Callback::new(move |outcome: SubmissionOutcome| {
        notifications.push(outcome.to_string());
    });

    view! {
        <Show when=move || form_mode.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close.run(())></div>
            <div class="modal">
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| close.run(())>
                    "×"
                </button>
                <header class="modal-logo">
                    <span>"YOUNGCHA"</span>
                    <span>"PEDIA"</span>
                </header>
                <CredentialForm
                    initial_mode=form_mode.get_untracked().unwrap_or_default()
                    on_login_success=on_login_success
                    on_navigate=on_navigate
                    on_close=close
                    on_mode_change=on_mode_change
                    on_success=on_success
                />
            </div>
        </Show>
    }
}
