//! Blocking HTTP transport for the Trend Radar REST API.
//!
//! Every call is a single attempt: no retries, no caching, and no timeout
//! unless one was configured. Non-2xx responses are turned into a
//! [`RequestError`] carrying the backend's `detail` message.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::{RequestError, Result, TrendRadarError};

/// Message used when an error response carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "API request failed";

/// Thin JSON client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            TrendRadarError::Config(format!("Invalid API base URL '{}': {}", base_url, e))
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("trend-radar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let response = self.send(Method::GET, endpoint, None::<&()>)?;
        parse_json(response)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &Endpoint, body: &B) -> Result<T> {
        let response = self.send(Method::POST, endpoint, Some(body))?;
        parse_json(response)
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(&self, endpoint: &Endpoint, body: &B) -> Result<T> {
        let response = self.send(Method::PUT, endpoint, Some(body))?;
        parse_json(response)
    }

    /// Issue a DELETE. Any success body is ignored.
    pub fn delete(&self, endpoint: &Endpoint) -> Result<()> {
        self.send(Method::DELETE, endpoint, None::<&()>)?;
        Ok(())
    }

    /// Send one request and translate failures. Returns only 2xx responses.
    fn send<B: Serialize>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = endpoint.resolve(&self.base_url)?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            RequestError::transport(format!("Network error: {}", e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().unwrap_or_default();
        let message = detail_message(&text)
            .unwrap_or_else(|| format!("{} (HTTP {})", FALLBACK_ERROR_MESSAGE, status.as_u16()));
        tracing::warn!("{} {} returned {}: {}", method, url, status, message);
        Err(RequestError::backend(status.as_u16(), message).into())
    }
}

/// Extract the `detail` string from a JSON error body.
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().clone();
    let text = response
        .text()
        .map_err(|e| RequestError::transport(format!("Failed to read response: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::error!("Malformed response from {}: {}", url, e);
        RequestError::transport(format!("Malformed response from server: {}", e)).into()
    })
}
