//! Leptos presentation layer

pub mod auth;
pub mod navbar;
pub mod notifications;
pub mod pages;

pub use auth::{
    ClientSettingsMeta, CredentialForm, CredentialModal, provide_client_settings,
    provide_session_context, use_session_context,
};
pub use navbar::Navbar;
pub use notifications::{NotificationsContainer, provide_notifications, use_notifications};
