//! Session context
//!
//! The host side of authentication: once the credential form hands over a
//! token, this context owns it and persists it to localStorage.

use leptos::prelude::*;

/// localStorage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "TOKEN";

/// Reactive session state shared through the component tree
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Persist a freshly issued token
    pub fn store(&self, token: &str) {
        if let Err(e) = save_token(token) {
            tracing::warn!(error = %e, "failed to persist session token");
        }
    }

    /// Re-read the authentication status from storage
    pub fn refresh(&self) {
        self.token.set(load_token());
    }

    pub fn logout(&self) {
        if let Err(e) = clear_token() {
            tracing::warn!(error = %e, "failed to clear session token");
        }
        self.token.set(None);
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Start logged out on both server and client to avoid a hydration mismatch
    let ctx = SessionContext {
        token: RwSignal::new(None),
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| ctx.refresh());

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("No window available")?
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or_else(|| "localStorage not available".to_string())
}

#[cfg(not(feature = "ssr"))]
fn load_token() -> Option<String> {
    local_storage()
        .ok()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

#[cfg(not(feature = "ssr"))]
fn save_token(token: &str) -> Result<(), String> {
    local_storage()?
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|_| "Failed to set token".to_string())
}

#[cfg(not(feature = "ssr"))]
fn clear_token() -> Result<(), String> {
    local_storage()?
        .remove_item(TOKEN_STORAGE_KEY)
        .map_err(|_| "Failed to remove token".to_string())
}

// SSR stubs - there is no storage on the server
#[cfg(feature = "ssr")]
fn load_token() -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
fn save_token(_token: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(feature = "ssr")]
fn clear_token() -> Result<(), String> {
    Ok(())
}
