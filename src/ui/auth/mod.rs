//! Authentication UI module
//!
//! The credential form, the modal hosting it, and the session context that
//! receives the token after a successful login.

mod credential_form;
mod field;
mod modal;
mod session;
mod settings;

pub use credential_form::CredentialForm;
pub use field::CredentialField;
pub use modal::{AFTER_LOGIN_PATH, CredentialModal};
pub use session::{SessionContext, TOKEN_STORAGE_KEY, provide_session_context, use_session_context};
pub use settings::{ClientSettingsMeta, provide_client_settings, use_client_settings};
