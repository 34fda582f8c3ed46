//! Integration tests running the `reqwest` client against a local auth API
//!
//! Each test binds an axum server on an ephemeral port that mimics the remote
//! service's status codes.

#[cfg(feature = "ssr")]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    use crate::core::client::HttpAuthClient;
    use crate::core::{
        ApiUrls, ControllerOptions, CredentialFormController, Field, FormMode, HostCallbacks,
        SubmissionOutcome,
    };

    const KNOWN_EMAIL: &str = "kim@example.com";
    const KNOWN_PASSWORD: &str = "Abc123456!";

    async fn login_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let email = body["email"].as_str().unwrap_or_default();
        let password = body["password"].as_str().unwrap_or_default();

        if email.is_empty() || password.is_empty() {
            (StatusCode::BAD_REQUEST, Json(json!({ "message": "KEY_ERROR" })))
        } else if email == KNOWN_EMAIL && password == KNOWN_PASSWORD {
            (StatusCode::OK, Json(json!({ "token": "issued-token" })))
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": "INVALID_USER" })))
        }
    }

    async fn signup_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["email"] == KNOWN_EMAIL {
            (StatusCode::CONFLICT, Json(json!({ "message": "DUPLICATED_EMAIL" })))
        } else {
            (StatusCode::CREATED, Json(json!({ "message": "SUCCESS" })))
        }
    }

    /// Start the fake auth API and return its base URL
    async fn spawn_auth_api() -> String {
        let app = Router::new()
            .route("/users/login", post(login_handler))
            .route("/users/signup", post(signup_handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[derive(Default)]
    struct Host {
        token: RefCell<Option<String>>,
        navigations: RefCell<usize>,
        closes: RefCell<usize>,
    }

    impl HostCallbacks for Host {
        fn on_login_success(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }
        fn on_navigate_after_login(&self) {
            *self.navigations.borrow_mut() += 1;
        }
        fn on_close_after_sign_up(&self) {
            *self.closes.borrow_mut() += 1;
        }
    }

    fn controller_for(
        base_url: &str,
        mode: FormMode,
    ) -> (CredentialFormController<HttpAuthClient>, Rc<Host>) {
        let host = Rc::new(Host::default());
        let controller = CredentialFormController::new(
            HttpAuthClient::new(ApiUrls::from_base(base_url)),
            host.clone(),
            mode,
            ControllerOptions {
                timeout: Duration::from_secs(5),
            },
        );
        (controller, host)
    }

    fn fill(
        controller: &CredentialFormController<HttpAuthClient>,
        email: &str,
        password: &str,
    ) {
        controller.update_field(Field::Name, "Kim");
        controller.update_field(Field::Email, email);
        controller.update_field(Field::Password, password);
        controller.mark_touched();
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let base_url = spawn_auth_api().await;
        let (controller, host) = controller_for(&base_url, FormMode::Login);
        fill(&controller, KNOWN_EMAIL, KNOWN_PASSWORD);

        let outcome = controller.submit_login().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success(Some("issued-token".into())));
        assert_eq!(host.token.borrow().as_deref(), Some("issued-token"));
        assert_eq!(*host.navigations.borrow(), 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let base_url = spawn_auth_api().await;
        let (controller, host) = controller_for(&base_url, FormMode::Login);
        fill(&controller, KNOWN_EMAIL, "Wrong12345!");

        let outcome = controller.submit_login().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::InvalidCredentials);
        assert!(host.token.borrow().is_none());
        assert_eq!(controller.form().value(Field::Password), "Wrong12345!");
    }

    #[tokio::test]
    async fn test_sign_up_created() {
        let base_url = spawn_auth_api().await;
        let (controller, host) = controller_for(&base_url, FormMode::SignUp);
        fill(&controller, "new@example.com", KNOWN_PASSWORD);

        let outcome = controller.submit_sign_up().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success(None));
        assert_eq!(*host.closes.borrow(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_conflict() {
        let base_url = spawn_auth_api().await;
        let (controller, host) = controller_for(&base_url, FormMode::SignUp);
        fill(&controller, KNOWN_EMAIL, KNOWN_PASSWORD);

        let outcome = controller.submit_sign_up().await.unwrap();

        assert_eq!(outcome, SubmissionOutcome::ValidationFailed);
        assert_eq!(*host.closes.borrow(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_unknown_error() {
        // Bind and drop a listener so the port is very likely closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (controller, _) = controller_for(&format!("http://{addr}"), FormMode::Login);
        fill(&controller, KNOWN_EMAIL, KNOWN_PASSWORD);

        match controller.submit_login().await.unwrap() {
            SubmissionOutcome::UnknownError(message) => {
                assert!(message.starts_with("network error"), "{message}")
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
