//! Shared request plumbing.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{ADMIN_HEADER, AdminToken, ApiConfig, ApiError};

/// Handle to the backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client configured from [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {}", url);
        self.http.get(url)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);
        self.http.post(url)
    }

    pub(crate) fn with_admin(request: RequestBuilder, token: &AdminToken) -> RequestBuilder {
        request.header(ADMIN_HEADER, token.as_str())
    }

    /// Send a request, turning non-success statuses into [`ApiError::Status`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response_body(status.as_u16(), &body);
        tracing::warn!("Backend rejected request: {}", err);
        Err(err)
    }

    /// Send a request and decode a JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
