//! Auth API endpoints and request settings.
//!
//! The server loads [`Config`] from environment variables after calling
//! `dotenvy::dotenv()` and hands the browser a [`ClientSettings`] through two
//! `<meta>` tags in the page head. Without them the browser falls back to
//! `YOUNGCHA_API_BASE_URL`, read at compile time.

use std::time::Duration;

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Login endpoint path, relative to the base URL
pub const LOGIN_PATH: &str = "/users/login";

/// Sign-up endpoint path, relative to the base URL
pub const SIGNUP_PATH: &str = "/users/signup";

/// Default bound on a single auth request (10s)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// `<meta>` name carrying the auth API base URL to the browser
pub const API_BASE_URL_META: &str = "youngcha-api-base-url";

/// `<meta>` name carrying the request timeout, in milliseconds
pub const REQUEST_TIMEOUT_META: &str = "youngcha-request-timeout-ms";

/// Base URL compiled into the binary, or the default
fn compiled_base_url() -> &'static str {
    option_env!("YOUNGCHA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Absolute URLs of the auth API endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    pub login: String,
    pub signup: String,
}

impl ApiUrls {
    /// Build endpoint URLs under `base`, ignoring a trailing slash
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            login: format!("{base}{LOGIN_PATH}"),
            signup: format!("{base}{SIGNUP_PATH}"),
        }
    }
}

impl Default for ApiUrls {
    fn default() -> Self {
        Self::from_base(compiled_base_url())
    }
}

/// Tunables of a credential form controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Upper bound on one login or sign-up request
    pub timeout: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Endpoint and timeout settings shared by the server and the hydrated client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl ClientSettings {
    /// Rebuild settings from `<meta>` contents.
    ///
    /// A missing or malformed value falls back to its default.
    pub fn from_meta(api_base_url: Option<String>, timeout_ms: Option<String>) -> Self {
        let defaults = Self::default();
        let timeout = match timeout_ms {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    tracing::warn!(value = %raw, "ignoring malformed request timeout");
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            api_base_url: api_base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            timeout,
        }
    }

    /// Timeout as written into the `<meta>` tag
    pub fn timeout_millis(&self) -> String {
        self.timeout.as_millis().to_string()
    }

    pub fn api_urls(&self) -> ApiUrls {
        ApiUrls::from_base(&self.api_base_url)
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            timeout: self.timeout,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: compiled_base_url().to_string(),
            timeout: ControllerOptions::default().timeout,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AUTH_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the auth API
    /// Example: https://api.youngchapedia.com
    pub api_base_url: String,

    /// Upper bound on a single auth request
    pub request_timeout: Duration,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("AUTH_API_BASE_URL").ok(),
            std::env::var("AUTH_REQUEST_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(
        api_base_url: Option<String>,
        request_timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let request_timeout = match request_timeout_secs {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url: api_base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout,
        })
    }

    /// Settings forwarded to the browser
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_base_url: self.api_base_url.clone(),
            timeout: self.request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ApiUrls
    // ========================================================================

    #[test]
    fn test_api_urls_from_base() {
        let urls = ApiUrls::from_base("https://api.example.com");
        assert_eq!(urls.login, "https://api.example.com/users/login");
        assert_eq!(urls.signup, "https://api.example.com/users/signup");
    }

    #[test]
    fn test_api_urls_trailing_slash() {
        let urls = ApiUrls::from_base("http://10.0.0.5:8000/");
        assert_eq!(urls.login, "http://10.0.0.5:8000/users/login");
    }

    #[test]
    fn test_controller_options_default() {
        assert_eq!(
            ControllerOptions::default().timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    // ========================================================================
    // ClientSettings
    // ========================================================================

    #[test]
    fn test_client_settings_from_meta() {
        let settings = ClientSettings::from_meta(
            Some("https://api.example.com".into()),
            Some("2500".into()),
        );
        assert_eq!(settings.api_urls().signup, "https://api.example.com/users/signup");
        assert_eq!(
            settings.controller_options().timeout,
            Duration::from_millis(2500)
        );
        assert_eq!(settings.timeout_millis(), "2500");
    }

    #[test]
    fn test_client_settings_missing_meta_uses_defaults() {
        assert_eq!(ClientSettings::from_meta(None, None), ClientSettings::default());
        assert_eq!(
            ClientSettings::from_meta(Some(" ".into()), Some("0".into())),
            ClientSettings::default()
        );
        assert_eq!(
            ClientSettings::from_meta(None, Some("soon".into())).timeout,
            ControllerOptions::default().timeout
        );
    }

    // ========================================================================
    // Config (no env var dependencies - thread safe)
    // ========================================================================

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_defaults() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_with_values() {
        let config =
            Config::from_values(Some("https://api.example.com".into()), Some(" 3 ".into()))
                .unwrap();
        let settings = config.client_settings();
        assert_eq!(settings.api_urls().login, "https://api.example.com/users/login");
        assert_eq!(settings.controller_options().timeout, Duration::from_secs(3));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_blank_base_url_falls_back() {
        let config = Config::from_values(Some("  ".into()), None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_invalid_timeout() {
        assert_eq!(
            Config::from_values(None, Some("soon".into())),
            Err(ConfigError::InvalidTimeout("soon".into()))
        );
        assert_eq!(
            Config::from_values(None, Some("0".into())),
            Err(ConfigError::InvalidTimeout("0".into()))
        );
    }
}
