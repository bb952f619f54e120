use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, AUTHORIZATION},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;

use super::{types::ApiError, unauthorized::UnauthorizedPolicy};
use crate::{config, state::session::SessionStore};

/// The single request pipeline: bearer token on the way out, 401 policy on
/// the way back.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
    unauthorized: UnauthorizedPolicy,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: SessionStore::default(),
            unauthorized: UnauthorizedPolicy::new(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn with_unauthorized_policy(mut self, policy: UnauthorizedPolicy) -> Self {
        self.unauthorized = policy;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn unauthorized_policy(&self) -> &UnauthorizedPolicy {
        &self.unauthorized
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        let base = if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        };
        base.trim_end_matches('/').to_string()
    }

    pub(super) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(super) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.token() {
            headers.insert(
                AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::unknown("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    pub(super) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.unauthorized.apply(&self.session);
        }
    }

    /// Sends `request` with auth headers and turns any non-2xx answer into an
    /// [`ApiError`]. A 401 runs the unauthorized policy before the error is
    /// returned.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let headers = self.get_auth_headers()?;
        let request = request
            .headers(headers)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!("{} {}", method, path);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let error = ApiError::from_response_body(status.as_u16(), &body);
        warn!("{} {} failed with {}: {}", method, path, status, error);
        Err(error)
    }

    pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }
}
