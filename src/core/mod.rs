//! Credential form core: validation, form state and the login/sign-up state machine

pub mod client;
#[cfg(test)]
mod client_integration;
pub mod config;
pub mod controller;
pub mod form;
pub mod timeout;
pub mod validation;

pub use client::{AuthApi, ClientError, DefaultAuthClient};
pub use config::{ApiUrls, ClientSettings, ControllerOptions};
pub use controller::{
    CloseHandle, CredentialFormController, HostCallbacks, Phase, SubmissionOutcome, SubmitRejected,
};
pub use form::{Field, FormMode, FormState};
pub use validation::{Validity, validate_email, validate_name, validate_password};
