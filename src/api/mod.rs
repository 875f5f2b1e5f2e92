//! Backend API Client
//!
//! Fetch-backed REST client for the project search service, organized by
//! endpoint group. Every failure is returned as an [`ApiError`] value.

mod health;
mod projects;
mod types;

use std::future::Future;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DashboardConfig;

pub use types::*;

/// Normalized transport failure: non-2xx status, or status 0 for
/// network, timeout and decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn http(status: u16, reason: &str) -> Self {
        Self {
            message: format!("HTTP {}: {}", status, reason),
            status,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 0,
        }
    }

    pub fn timeout(timeout_ms: u32) -> Self {
        Self::network(format!("Request timed out after {} ms", timeout_ms))
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            http: reqwest::Client::new(),
        }
    }

    /// Client for the configured backend; an empty base URL means the page origin.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(resolve_base_url(&config.api_base_url), config.request_timeout_ms)
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path);
        log::debug!("GET {}", url);

        let mut request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = with_timeout(self.timeout_ms, request.send())
            .await?
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::http(status.as_u16(), status.canonical_reason().unwrap_or("Unknown"));
            log::warn!("GET {} failed: {}", url, err);
            return Err(err);
        }

        with_timeout(self.timeout_ms, response.json::<T>())
            .await?
            .map_err(|e| ApiError::network(e.to_string()))
    }
}

/// Race `fut` against a timer; the loser is dropped.
pub(crate) async fn with_timeout<F: Future>(timeout_ms: u32, fut: F) -> ApiResult<F::Output> {
    let timer = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(fut);
    futures::pin_mut!(timer);

    match future::select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::timeout(timeout_ms)),
    }
}

/// Configured base URL, or the page origin when none is configured.
pub fn resolve_base_url(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// URL of the current document, used to resolve relative resource paths.
pub fn page_url() -> Option<Url> {
    let href = web_sys::window()?.location().href().ok()?;
    Url::parse(&href).ok()
}
