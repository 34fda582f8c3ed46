//! Credential form controller
//!
//! Turns field edits and blur events into validated form state, gates submission,
//! and maps auth API responses to a [`SubmissionOutcome`].
//!
//! # Lifecycle
//!
//! Each submission runs `Idle -> Submitting -> outcome -> Idle`. A submit issued
//! while another is outstanding is rejected without touching the network. The
//! controller is a cheap `Clone` handle; the presentation layer keeps one copy
//! and moves another into the task that awaits the response. When the form is
//! torn down, [`CloseHandle::close`] marks it dead and any response that arrives
//! afterwards is dropped.
//!
//! Session token persistence and navigation belong to the host, which receives
//! them through [`HostCallbacks`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use super::client::{
    ApiResponse, AuthApi, ClientError, LoginRequest, LoginResponse, SignUpRequest,
};
use super::config::ControllerOptions;
use super::form::{Field, FormMode, FormState};
use super::timeout::with_timeout;
use super::validation::Validity;

/// Normalized result of one login or sign-up attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Login carries the issued session token; sign-up carries none
    Success(Option<String>),
    FieldsMissing,
    InvalidCredentials,
    ValidationFailed,
    UnknownError(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(token) => token.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Success(Some(_)) => write!(f, "Welcome!"),
            SubmissionOutcome::Success(None) => write!(f, "Your account has been created."),
            SubmissionOutcome::FieldsMissing => write!(f, "Please fill in every field."),
            SubmissionOutcome::InvalidCredentials => {
                write!(f, "Please check your email and password.")
            }
            SubmissionOutcome::ValidationFailed => {
                write!(f, "Sign-up failed. Please try again.")
            }
            SubmissionOutcome::UnknownError(message) => {
                write!(f, "An unknown error occurred ({message}).")
            }
        }
    }
}

impl From<ClientError> for SubmissionOutcome {
    fn from(err: ClientError) -> Self {
        SubmissionOutcome::UnknownError(err.to_string())
    }
}

/// Why a submit never reached the network (or its response was dropped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("required fields are not all valid")]
    NotReady,
    #[error("a submission is already in progress")]
    InFlight,
    #[error("the form has been closed")]
    Closed,
}

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Hooks into the host application. Every hook defaults to a no-op.
pub trait HostCallbacks {
    /// Login succeeded; the host persists the token and refreshes its auth status
    fn on_login_success(&self, _token: &str) {}

    fn on_sign_up_success(&self) {}

    /// Fired after [`HostCallbacks::on_login_success`]
    fn on_navigate_after_login(&self) {}

    /// Fired after [`HostCallbacks::on_sign_up_success`]
    fn on_close_after_sign_up(&self) {}

    fn on_switch_to_login_mode(&self) {}

    fn on_switch_to_sign_up_mode(&self) {}
}

/// Liveness flag shared by every clone of a controller
#[derive(Debug, Clone, Default)]
pub struct CloseHandle(Arc<AtomicBool>);

impl CloseHandle {
    /// Mark the form as torn down. Idempotent.
    pub fn close(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Default)]
struct ControllerState {
    form: FormState,
    mode: FormMode,
    phase: Phase,
}

/// Form state, validation gate and submission state machine of one form instance
pub struct CredentialFormController<C> {
    client: Rc<C>,
    callbacks: Rc<dyn HostCallbacks>,
    state: Rc<RefCell<ControllerState>>,
    closed: CloseHandle,
    options: ControllerOptions,
}

impl<C> Clone for CredentialFormController<C> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            callbacks: Rc::clone(&self.callbacks),
            state: Rc::clone(&self.state),
            closed: self.closed.clone(),
            options: self.options,
        }
    }
}

impl<C: AuthApi> CredentialFormController<C> {
    pub fn new(
        client: C,
        callbacks: Rc<dyn HostCallbacks>,
        mode: FormMode,
        options: ControllerOptions,
    ) -> Self {
        Self {
            client: Rc::new(client),
            callbacks,
            state: Rc::new(RefCell::new(ControllerState {
                mode,
                ..ControllerState::default()
            })),
            closed: CloseHandle::default(),
            options,
        }
    }

    // ========================================================================
    // Field events
    // ========================================================================

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.state.borrow_mut().form.update(field, value);
    }

    /// Reset a field to the empty string (the "delete" button)
    pub fn clear_field(&self, field: Field) {
        debug!(%field, "clearing field");
        self.state.borrow_mut().form.clear(field);
    }

    /// Latch validation on. Only the first call has any effect.
    pub fn mark_touched(&self) {
        if self.state.borrow_mut().form.mark_touched() {
            debug!("credential form touched, validation enabled");
        }
    }

    /// Change the active mode, keeping field contents
    pub fn switch_mode(&self, mode: FormMode) {
        let previous = std::mem::replace(&mut self.state.borrow_mut().mode, mode);
        if previous == mode {
            return;
        }
        debug!(from = %previous, to = %mode, "switching form mode");
        match mode {
            FormMode::Login => self.callbacks.on_switch_to_login_mode(),
            FormMode::SignUp => self.callbacks.on_switch_to_sign_up_mode(),
        }
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Snapshot of the current form state
    pub fn form(&self) -> FormState {
        self.state.borrow().form.clone()
    }

    pub fn mode(&self) -> FormMode {
        self.state.borrow().mode
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn validity(&self, field: Field) -> Validity {
        self.state.borrow().form.validity(field)
    }

    /// Whether the submit control of the active mode is enabled
    pub fn can_submit(&self) -> bool {
        let state = self.state.borrow();
        state.phase == Phase::Idle && state.form.can_submit(state.mode)
    }

    pub fn close_handle(&self) -> CloseHandle {
        self.closed.clone()
    }

    pub fn is_live(&self) -> bool {
        !self.closed.is_closed()
    }

    pub fn close(&self) {
        self.closed.close();
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Log in with the current email and password.
    ///
    /// On success the host gets `on_login_success(token)` and then
    /// `on_navigate_after_login()`.
    pub async fn submit_login(&self) -> Result<SubmissionOutcome, SubmitRejected> {
        let request = self.begin(FormMode::Login, |form| LoginRequest {
            email: form.value(Field::Email).to_string(),
            password: form.value(Field::Password).to_string(),
        })?;

        info!("submitting login");
        let response = with_timeout(self.options.timeout, self.client.login(&request))
            .await
            .map_err(ClientError::from)
            .and_then(|result| result);
        self.finish(FormMode::Login)?;

        let outcome = login_outcome(response);
        log_outcome(FormMode::Login, &outcome);
        if let SubmissionOutcome::Success(Some(token)) = &outcome {
            self.callbacks.on_login_success(token);
            self.callbacks.on_navigate_after_login();
        }
        Ok(outcome)
    }

    /// Register with the current name, email and password.
    ///
    /// On success the host gets `on_sign_up_success()` and then
    /// `on_close_after_sign_up()`.
    pub async fn submit_sign_up(&self) -> Result<SubmissionOutcome, SubmitRejected> {
        let request = self.begin(FormMode::SignUp, |form| SignUpRequest {
            name: form.value(Field::Name).to_string(),
            email: form.value(Field::Email).to_string(),
            password: form.value(Field::Password).to_string(),
        })?;

        info!("submitting sign-up");
        let response = with_timeout(self.options.timeout, self.client.sign_up(&request))
            .await
            .map_err(ClientError::from)
            .and_then(|result| result);
        self.finish(FormMode::SignUp)?;

        let outcome = sign_up_outcome(response);
        log_outcome(FormMode::SignUp, &outcome);
        if outcome.is_success() {
            self.callbacks.on_sign_up_success();
            self.callbacks.on_close_after_sign_up();
        }
        Ok(outcome)
    }

    /// Enter `Submitting` and build the request, or explain why not
    fn begin<R>(
        &self,
        mode: FormMode,
        build: impl FnOnce(&FormState) -> R,
    ) -> Result<R, SubmitRejected> {
        if self.closed.is_closed() {
            return Err(SubmitRejected::Closed);
        }

        let mut state = self.state.borrow_mut();
        if state.phase == Phase::Submitting {
            warn!(%mode, "ignoring submit while another is in flight");
            return Err(SubmitRejected::InFlight);
        }
        if !state.form.can_submit(mode) {
            warn!(%mode, "ignoring submit with incomplete fields");
            return Err(SubmitRejected::NotReady);
        }

        state.phase = Phase::Submitting;
        Ok(build(&state.form))
    }

    /// Return to `Idle`; a closed controller drops the response
    fn finish(&self, mode: FormMode) -> Result<(), SubmitRejected> {
        self.state.borrow_mut().phase = Phase::Idle;
        if self.closed.is_closed() {
            debug!(%mode, "form closed while request was in flight, dropping response");
            return Err(SubmitRejected::Closed);
        }
        Ok(())
    }
}

fn login_outcome(response: Result<ApiResponse, ClientError>) -> SubmissionOutcome {
    let response = match response {
        Ok(response) => response,
        Err(err) => return err.into(),
    };

    match response.status {
        200 => match serde_json::from_str::<LoginResponse>(&response.body) {
            Ok(body) => SubmissionOutcome::Success(Some(body.token)),
            Err(e) => ClientError::InvalidBody(e.to_string()).into(),
        },
        400 => SubmissionOutcome::FieldsMissing,
        401 => SubmissionOutcome::InvalidCredentials,
        status => SubmissionOutcome::UnknownError(format!("unexpected status {status}")),
    }
}

fn sign_up_outcome(response: Result<ApiResponse, ClientError>) -> SubmissionOutcome {
    let response = match response {
        Ok(response) => response,
        Err(err) => return err.into(),
    };

    match response.status {
        200 | 201 => match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(_) => SubmissionOutcome::Success(None),
            Err(e) => ClientError::InvalidBody(e.to_string()).into(),
        },
        _ => SubmissionOutcome::ValidationFailed,
    }
}

fn log_outcome(mode: FormMode, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success(_) => info!(%mode, "submission succeeded"),
        SubmissionOutcome::UnknownError(message) => {
            warn!(%mode, error = %message, "submission failed")
        }
        other => info!(%mode, outcome = ?other, "submission rejected by auth API"),
    }
}
