//! Auth API client
//!
//! The client only moves bytes: it POSTs a JSON body and hands back the raw status
//! and body text. Interpreting statuses is the controller's job.
//!
//! Two implementations exist:
//! - [`HttpAuthClient`] (server/native builds) on top of `reqwest`
//! - [`BrowserAuthClient`] (browser builds) on top of `gloo-net`

use serde::{Deserialize, Serialize};

use super::config::ApiUrls;

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of a successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Raw HTTP response from the auth API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport-level failures
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(#[from] super::timeout::Elapsed),

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// The remote authentication service
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ClientError>;

    async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiResponse, ClientError>;
}

/// Client used by the running application for the current build target
#[cfg(feature = "ssr")]
pub type DefaultAuthClient = HttpAuthClient;

/// Client used by the running application for the current build target
#[cfg(not(feature = "ssr"))]
pub type DefaultAuthClient = BrowserAuthClient;

/// `reqwest`-backed client
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    urls: ApiUrls,
}

#[cfg(feature = "ssr")]
impl HttpAuthClient {
    pub fn new(urls: ApiUrls) -> Self {
        Self {
            http: reqwest::Client::new(),
            urls,
        }
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<ApiResponse, ClientError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::InvalidBody(e.to_string()))?;

        tracing::debug!(url, status, "auth API responded");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(feature = "ssr")]
impl AuthApi for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ClientError> {
        self.post_json(&self.urls.login, request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiResponse, ClientError> {
        self.post_json(&self.urls.signup, request).await
    }
}

/// `gloo-net` (fetch) backed client
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone)]
pub struct BrowserAuthClient {
    urls: ApiUrls,
}

#[cfg(not(feature = "ssr"))]
impl BrowserAuthClient {
    pub fn new(urls: ApiUrls) -> Self {
        Self { urls }
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<ApiResponse, ClientError> {
        use gloo_net::http::Request;

        let response = Request::post(url)
            .json(body)
            .map_err(|e| ClientError::InvalidBody(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::InvalidBody(e.to_string()))?;

        tracing::debug!(url, status, "auth API responded");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(not(feature = "ssr"))]
impl AuthApi for BrowserAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, ClientError> {
        self.post_json(&self.urls.login, request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiResponse, ClientError> {
        self.post_json(&self.urls.signup, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_body() {
        let request = LoginRequest {
            email: "user@example.com".into(),
            password: "Abc123456!".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "user@example.com", "password": "Abc123456!" })
        );
    }

    #[test]
    fn test_sign_up_request_body() {
        let request = SignUpRequest {
            name: "Kim".into(),
            email: "kim@example.com".into(),
            password: "Abc123456!".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Kim");
        assert_eq!(json["email"], "kim@example.com");
        assert_eq!(json["password"], "Abc123456!");
    }

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"abc.def.ghi","message":"SUCCESS"}"#).unwrap();
        assert_eq!(response.token, "abc.def.ghi");
    }

    #[test]
    fn test_client_error_messages() {
        assert_eq!(
            ClientError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        let elapsed = crate::core::timeout::Elapsed(std::time::Duration::from_millis(50));
        assert_eq!(
            ClientError::from(elapsed).to_string(),
            "request timed out: no response within 50ms"
        );
    }
}
