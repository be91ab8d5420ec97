use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::query::to_query_string;
use super::types::ApiResponse;
use crate::app::ApiConfig;
use crate::constants::API_PREFIX;
use crate::session::SessionStore;
use crate::utils::{ClientError, Result};

/// The single path for outbound HTTP requests
///
/// Every request carries the current session's bearer token when someone is
/// logged in, is JSON-typed and is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
    session: SessionStore,
}

impl ApiGateway {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            ClientError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "API base URL must be http or https, got '{}'",
                config.base_url
            )));
        }

        let timeout = Duration::from_millis(config.timeout_ms);
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            session,
        })
    }

    /// Full URL of `endpoint`, e.g. `questions` -> `<base>/api/v1/questions`
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        let raw = format!(
            "{}/{}/{}",
            self.base_url,
            API_PREFIX,
            endpoint.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| ClientError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))
    }

    /// GET `endpoint` with `params` as the query string
    ///
    /// Non-2xx statuses fail with `RequestFailed`; no response at all (DNS,
    /// refused connection, timeout) fails with `Transport`. A 2xx body is
    /// returned as the server sent it, including `success: false` envelopes.
    pub async fn get<T, P>(&self, endpoint: &str, params: &P) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let mut url = self.url_for(endpoint)?;
        let query = to_query_string(params)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        let mut request = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        debug!(%url, authorized = self.session.is_logged_in(), "GET");

        let response = request.send().await.map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();
            warn!(%url, status = status.as_u16(), %status_text, "Request failed");
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(&url, e))?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Malformed response body");
            ClientError::Parse(e)
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn transport_error(&self, url: &Url, err: reqwest::Error) -> ClientError {
        let message = if err.is_timeout() {
            format!("request to {} timed out after {}ms", url.path(), self.timeout.as_millis())
        } else {
            format!("request to {} failed: {}", url.path(), err)
        };
        warn!(%url, error = %err, "Transport failure");
        ClientError::Transport(message)
    }
}
