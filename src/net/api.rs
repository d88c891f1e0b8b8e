//! Account API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since account calls are only
//! made from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]; pages turn it into a toast via
//! [`ApiError::user_message`] and a generic fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ClientConfig;

pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected ({status})")]
    Rejected { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Server-provided, human-readable message, if the server sent one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Build the error for a non-2xx response from its raw body.
#[cfg(any(test, feature = "hydrate"))]
fn rejected(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    ApiError::Rejected { status, message }
}

/// Account endpoints used by the register and login pages.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// Exchange credentials for a token and user record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// [`AccountApi`] over `fetch`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAccountApi {
    base_url: String,
}

impl HttpAccountApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        let resp = gloo_net::http::Request::post(&self.endpoint(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(rejected(resp.status(), &raw));
        }
        resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl AccountApi for HttpAccountApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(REGISTER_ENDPOINT, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(REGISTER_ENDPOINT), request);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(LOGIN_ENDPOINT, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.endpoint(LOGIN_ENDPOINT), request);
            Err(ApiError::Unavailable)
        }
    }
}
