//! HTTP client for the backend REST API

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

use crate::{AuthContext, ClientConfig, ClientError, ClientResult};

/// HTTP client shared by every view
///
/// Cheap to clone; clones share the connection pool and the auth session.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: AuthContext,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        let auth = match &config.token {
            Some(token) => AuthContext::with_token(token.clone()),
            None => AuthContext::new(),
        };

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Auth session shared with all clones
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token when a session exists
    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path))).await;
        tracing::debug!(path, "GET");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let request = self
            .authorize(self.client.get(self.url(path)).query(query))
            .await;
        tracing::debug!(path, "GET");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self
            .authorize(self.client.post(self.url(path)).json(body))
            .await;
        tracing::debug!(path, "POST");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self
            .authorize(self.client.patch(self.url(path)).json(body))
            .await;
        tracing::debug!(path, "PATCH");
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await?;
            let text = ErrorBody::alert_text(&raw, status.canonical_reason().unwrap_or("error"));
            tracing::warn!(status = status.as_u16(), message = %text, "Request rejected");
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::BAD_REQUEST
                | StatusCode::UNPROCESSABLE_ENTITY
                | StatusCode::CONFLICT => ClientError::Validation(text),
                _ => ClientError::Internal(text),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::InvalidResponse(format!("{e} (status {})", status.as_u16()))
        })
    }
}
