//! The only place where network I/O happens.

use crate::core::{
    domain::{
        error::{PanelError, PanelResult},
        model::{client_config::RateLimitConfig, panel_connection::PanelConnection},
    },
    infrastructure::endpoint::api_url,
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
};
use std::sync::Arc;
use tracing::debug;

/// Media type the application API answers with.
pub const PANEL_MEDIA_TYPE: &str = "application/vnd.pterodactyl.v1+json";

/// One outgoing request, relative to the application API prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    pub method: Method,
    /// Path (and query) below `/api/application/`.
    pub path: String,
    /// Encoded JSON body; only sent for POST and PATCH.
    pub body: Option<Vec<u8>>,
}

impl PanelRequest {
    pub fn new(method: Method, path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }
}

/// Raw answer of the panel, before any status interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Issues exactly one authenticated round trip per call.
///
/// Implementations must report wire failures as `PanelError::Connection`
/// and hand back every HTTP status untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PanelRequest) -> PanelResult<RawResponse>;
}

/// `Transport` over a `reqwest::Client`.
#[derive(Debug)]
pub struct HttpTransport {
    http_client: Client,
    connection: Arc<PanelConnection>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl HttpTransport {
    /// Creates a transport for `connection`.
    ///
    /// Timeouts, proxies and TLS settings are those of `http_client`.
    ///
    /// # Errors
    /// Returns `PanelError::Validation` if the rate limit is zero.
    pub fn new(
        http_client: Client,
        connection: PanelConnection,
        rate_limit: Option<RateLimitConfig>,
    ) -> PanelResult<Self> {
        let rate_limiter = match rate_limit {
            Some(rl) => {
                let (rate, burst) = rl.quota()?;
                let quota = Quota::per_second(rate).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &PanelConnection {
        &self.connection
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PanelRequest) -> PanelResult<RawResponse> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = api_url(self.connection.panel_url(), &request.path);
        let token = self.connection.panel_token();

        let mut req_builder = self
            .http_client
            .request(request.method.clone(), &url)
            .header(AUTHORIZATION, token.as_bearer_header())
            .header(ACCEPT, PANEL_MEDIA_TYPE);

        if request.method == Method::POST || request.method == Method::PATCH {
            let body = request.body.unwrap_or_default();
            req_builder = req_builder
                .header(CONTENT_TYPE, "application/json")
                .header(CONTENT_LENGTH, body.len())
                .body(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| PanelError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| PanelError::Connection(format!("Failed to read response body: {}", e)))?
            .to_vec();

        debug!(method = %request.method, path = %request.path, status, "panel request completed");

        Ok(RawResponse { status, body })
    }
}
