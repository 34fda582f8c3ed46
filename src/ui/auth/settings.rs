//! Auth client settings handoff
//!
//! The server writes its [`ClientSettings`] into the page head; after hydration
//! the browser reads them back and provides them as context for every
//! credential form.

use leptos::prelude::*;

use crate::core::config::{API_BASE_URL_META, REQUEST_TIMEOUT_META};
use crate::core::ClientSettings;

/// `<meta>` tags carrying the server's client settings
#[component]
pub fn ClientSettingsMeta() -> impl IntoView {
    let settings = use_context::<ClientSettings>().unwrap_or_default();
    let timeout = settings.timeout_millis();

    view! {
        <meta name=API_BASE_URL_META content=settings.api_base_url/>
        <meta name=REQUEST_TIMEOUT_META content=timeout/>
    }
}

/// Make client settings available to the component tree.
///
/// Server renders already carry them from the request context; the hydrated
/// client reads them from the page head.
pub fn provide_client_settings() {
    if use_context::<ClientSettings>().is_some() {
        return;
    }
    provide_context(read_settings());
}

/// Settings for the current tree, or the compiled-in defaults
pub fn use_client_settings() -> ClientSettings {
    use_context::<ClientSettings>().unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn read_settings() -> ClientSettings {
    let content = |name: &str| -> Option<String> {
        web_sys::window()?
            .document()?
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()
            .flatten()?
            .get_attribute("content")
    };

    let settings = ClientSettings::from_meta(content(API_BASE_URL_META), content(REQUEST_TIMEOUT_META));
    tracing::debug!(api = %settings.api_base_url, timeout = ?settings.timeout, "client settings loaded");
    settings
}

// No page head to read on the server outside a request context
#[cfg(feature = "ssr")]
fn read_settings() -> ClientSettings {
    ClientSettings::default()
}
