//! Combined login / sign-up form component
//!
//! A thin view over [`CredentialFormController`]: every DOM event is forwarded to
//! the controller and the resulting form snapshot is copied into a signal for
//! rendering.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::field::CredentialField;
use super::settings::use_client_settings;
use crate::core::{
    CredentialFormController, DefaultAuthClient, Field, FormMode, FormState, HostCallbacks,
    SubmissionOutcome, SubmitRejected,
};

/// Forwards controller hooks to the Leptos callbacks given as props
struct FormCallbacks {
    mode: RwSignal<FormMode>,
    on_login_success: Option<Callback<String>>,
    on_navigate: Option<Callback<()>>,
    on_close: Option<Callback<()>>,
    on_mode_change: Option<Callback<FormMode>>,
    on_success: Option<Callback<SubmissionOutcome>>,
}

impl FormCallbacks {
    fn succeeded(&self, outcome: SubmissionOutcome) {
        if let Some(callback) = self.on_success.as_ref() {
            callback.run(outcome);
        }
    }

    fn mode_changed(&self, mode: FormMode) {
        self.mode.set(mode);
        if let Some(callback) = self.on_mode_change.as_ref() {
            callback.run(mode);
        }
    }
}

impl HostCallbacks for FormCallbacks {
    fn on_login_success(&self, token: &str) {
        if let Some(callback) = self.on_login_success.as_ref() {
            callback.run(token.to_string());
        }
        self.succeeded(SubmissionOutcome::Success(Some(token.to_string())));
    }

    fn on_sign_up_success(&self) {
        self.succeeded(SubmissionOutcome::Success(None));
    }

    fn on_navigate_after_login(&self) {
        if let Some(callback) = self.on_navigate.as_ref() {
            callback.run(());
        }
    }

    fn on_close_after_sign_up(&self) {
        if let Some(callback) = self.on_close.as_ref() {
            callback.run(());
        }
    }

    fn on_switch_to_login_mode(&self) {
        self.mode_changed(FormMode::Login);
    }

    fn on_switch_to_sign_up_mode(&self) {
        self.mode_changed(FormMode::SignUp);
    }
}

type Controller = CredentialFormController<DefaultAuthClient>;

/// Controller wired to the client settings in context
fn form_controller(callbacks: FormCallbacks, mode: FormMode) -> Controller {
    let settings = use_client_settings();
    CredentialFormController::new(
        DefaultAuthClient::new(settings.api_urls()),
        std::rc::Rc::new(callbacks),
        mode,
        settings.controller_options(),
    )
}

/// Login / sign-up form component
#[component]
pub fn CredentialForm(
    /// Mode the form opens in
    #[prop(optional)]
    initial_mode: FormMode,
    /// Callback receiving the session token after a successful login
    #[prop(optional, into)]
    on_login_success: Option<Callback<String>>,
    /// Callback to leave the form after a successful login
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
    /// Callback to close the form after a successful sign-up
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    /// Callback when the user switches between login and sign-up
    #[prop(optional, into)]
    on_mode_change: Option<Callback<FormMode>>,
    /// Callback receiving a successful outcome, fired before the form closes
    #[prop(optional, into)]
    on_success: Option<Callback<SubmissionOutcome>>,
) -> impl IntoView {
    let mode = RwSignal::new(initial_mode);
    let form = RwSignal::new(FormState::new());
    let submitting = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let callbacks = FormCallbacks {
        mode,
        on_login_success,
        on_navigate,
        on_close,
        on_mode_change,
        on_success,
    };
    let controller = form_controller(callbacks, initial_mode);

    // Drop late responses once the form is unmounted
    let close_handle = controller.close_handle();
    on_cleanup(move || close_handle.close());

    let controller = StoredValue::new_local(controller);
    let sync = move || form.set(controller.with_value(Controller::form));

    let on_input = Callback::new(move |(field, value): (Field, String)| {
        controller.with_value(|c| c.update_field(field, value));
        sync();
    });
    let on_blur = Callback::new(move |_: ()| {
        controller.with_value(Controller::mark_touched);
        sync();
    });
    let on_clear = Callback::new(move |field: Field| {
        controller.with_value(|c| c.clear_field(field));
        sync();
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(None);
        submitting.set(true);

        let controller = controller.get_value();
        spawn_local(async move {
            let result = match controller.mode() {
                FormMode::Login => controller.submit_login().await,
                FormMode::SignUp => controller.submit_sign_up().await,
            };
            if !controller.is_live() {
                return;
            }
            match result {
                Ok(outcome) => message.set(Some(outcome.to_string())),
                Err(SubmitRejected::Closed) => return,
                Err(rejected) => message.set(Some(rejected.to_string())),
            }
            submitting.set(false);
        });
    };

    let switch_mode = move |_: leptos::ev::MouseEvent| {
        message.set(None);
        controller.with_value(|c| c.switch_mode(c.mode().other()));
    };

    let can_submit = move || !submitting.get() && form.with(|f| f.can_submit(mode.get()));

    view! {
        <h2 class="form-header">{move || mode.get().title()}</h2>
        <form class="credential-form" on:submit=on_submit>
            <Show when=move || mode.get() == FormMode::SignUp>
                <CredentialField
                    field=Field::Name
                    placeholder="Name"
                    form=form
                    on_input=on_input
                    on_blur=on_blur
                    on_clear=on_clear
                />
            </Show>
            <CredentialField
                field=Field::Email
                placeholder="Email"
                form=form
                on_input=on_input
                on_blur=on_blur
                on_clear=on_clear
            />
            <CredentialField
                field=Field::Password
                input_type="password"
                placeholder="Password"
                form=form
                on_input=on_input
                on_blur=on_blur
                on_clear=on_clear
            />

            {move || message.get().map(|text| view! { <p class="form-message">{text}</p> })}

            <button type="submit" class="submit-button" disabled=move || !can_submit()>
                {move || mode.get().title()}
            </button>
        </form>

        {move || match mode.get() {
            FormMode::SignUp => view! {
                <p class="switch-mode">
                    "Already have an account? "
                    <button type="button" class="switch-mode-link" on:click=switch_mode>
                        "Log in"
                    </button>
                </p>
            }.into_any(),
            FormMode::Login => view! {
                <p class="switch-mode">
                    "Don't have an account? "
                    <button type="button" class="switch-mode-link" on:click=switch_mode>
                        "Sign up"
                    </button>
                </p>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::ClientSettings;
    use crate::core::client::{ApiResponse, AuthApi, ClientError, LoginRequest, SignUpRequest};
    use crate::core::config::ControllerOptions;

    struct FixedResponse(ApiResponse);

    impl AuthApi for FixedResponse {
        async fn login(&self, _request: &LoginRequest) -> Result<ApiResponse, ClientError> {
            Ok(self.0.clone())
        }

        async fn sign_up(&self, _request: &SignUpRequest) -> Result<ApiResponse, ClientError> {
            Ok(self.0.clone())
        }
    }

    fn callbacks(
        mode: FormMode,
        shown: RwSignal<Vec<String>>,
        open: RwSignal<bool>,
    ) -> FormCallbacks {
        let close = Callback::new(move |_: ()| open.set(false));
        FormCallbacks {
            mode: RwSignal::new(mode),
            on_login_success: None,
            on_navigate: Some(close),
            on_close: Some(close),
            on_mode_change: None,
            on_success: Some(Callback::new(move |outcome: SubmissionOutcome| {
                shown.update(|messages| messages.push(outcome.to_string()))
            })),
        }
    }

    fn filled(
        callbacks: FormCallbacks,
        mode: FormMode,
        response: ApiResponse,
    ) -> CredentialFormController<FixedResponse> {
        let controller = CredentialFormController::new(
            FixedResponse(response),
            std::rc::Rc::new(callbacks),
            mode,
            ControllerOptions::default(),
        );
        controller.update_field(Field::Name, "Kim");
        controller.update_field(Field::Email, "kim@example.com");
        controller.update_field(Field::Password, "Abc123456!");
        controller.mark_touched();
        controller
    }

    #[test]
    fn test_form_controller_uses_client_settings() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ClientSettings {
                api_base_url: "https://api.example.com".into(),
                timeout: Duration::from_millis(2500),
            });
            let open = RwSignal::new(true);
            let shown = RwSignal::new(Vec::new());
            let controller = form_controller(callbacks(FormMode::Login, shown, open), FormMode::Login);
            assert_eq!(controller.options().timeout, Duration::from_millis(2500));
        });
    }

    #[tokio::test]
    async fn test_sign_up_success_message_reaches_host() {
        let owner = Owner::new();
        owner.set();
        let open = RwSignal::new(true);
        let shown = RwSignal::new(Vec::new());
        let controller = filled(
            callbacks(FormMode::SignUp, shown, open),
            FormMode::SignUp,
            ApiResponse::new(201, "{}"),
        );

        let outcome = controller.submit_sign_up().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success(None));
        assert!(!open.get_untracked());
        assert_eq!(shown.get_untracked(), vec!["Your account has been created."]);
    }

    #[tokio::test]
    async fn test_login_success_message_reaches_host() {
        let owner = Owner::new();
        owner.set();
        let open = RwSignal::new(true);
        let shown = RwSignal::new(Vec::new());
        let controller = filled(
            callbacks(FormMode::Login, shown, open),
            FormMode::Login,
            ApiResponse::new(200, r#"{"token":"abc.def.ghi"}"#),
        );

        controller.submit_login().await.unwrap();

        assert!(!open.get_untracked());
        assert_eq!(shown.get_untracked(), vec!["Welcome!"]);
    }

    #[tokio::test]
    async fn test_failed_login_shows_nothing_to_host() {
        let owner = Owner::new();
        owner.set();
        let open = RwSignal::new(true);
        let shown = RwSignal::new(Vec::<String>::new());
        let controller = filled(
            callbacks(FormMode::Login, shown, open),
            FormMode::Login,
            ApiResponse::new(401, "{}"),
        );

        let outcome = controller.submit_login().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::InvalidCredentials);
        assert!(open.get_untracked());
        assert!(shown.get_untracked().is_empty());
    }
}
