/*
[INPUT]:  HTTP configuration (base URLs, timeouts, JWT credentials)
[OUTPUT]: Configured reqwest client and the shared request dispatcher
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Url, redirect};
use serde::Serialize;
use serde_json::Value;

use crate::http::{LedgerxError, Result};
use crate::types::{ApiData, into_data, status_payload};

/// Base URLs for LedgerX API
const API_BASE_URL: &str = "https://api.ledgerx.com";
const TRADE_BASE_URL: &str = "https://trade.ledgerx.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub jwt_token: String,
}

impl Credentials {
    pub fn new(jwt_token: impl Into<String>) -> Self {
        Self {
            jwt_token: jwt_token.into(),
        }
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("JWT {}", self.jwt_token))
            .map_err(|err| LedgerxError::Config(format!("invalid JWT token: {err}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("jwt_token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for LedgerX API
///
/// Holds one connection pool for both hosts. Methods take `&self` and are
/// meant to be awaited one after another.
#[derive(Debug)]
pub struct LedgerxClient {
    http_client: Client,
    api_base_url: Url,
    trade_base_url: Url,
    credentials: Credentials,
}

impl LedgerxClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_urls(config, credentials, API_BASE_URL, TRADE_BASE_URL)
    }

    /// Create a client pointed at custom hosts
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        credentials: Credentials,
        api_base_url: &str,
        trade_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            http_client,
            api_base_url: parse_base_url(api_base_url)?,
            trade_base_url: parse_base_url(trade_base_url)?,
            credentials,
        })
    }

    /// Replace the credentials used for subsequent requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build full URL for `api.ledgerx.com` endpoints
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url> {
        endpoint_url(&self.api_base_url, segments)
    }

    /// Build full URL for `trade.ledgerx.com` endpoints
    pub(crate) fn trade_url(&self, segments: &[&str]) -> Result<Url> {
        endpoint_url(&self.trade_base_url, segments)
    }

    /// Send a request and return the `data` field of the response.
    pub(crate) async fn request_data<P>(
        &self,
        method: Method,
        url: Url,
        params: Option<&P>,
    ) -> Result<ApiData>
    where
        P: Serialize + ?Sized,
    {
        let payload = self.request(method, url, params).await?;
        Ok(into_data(payload))
    }

    /// Shared dispatcher for every endpoint.
    ///
    /// GET and DELETE carry `params` in the query string, every other verb
    /// sends them as a JSON body. Redirects are returned as-is.
    pub async fn request<P>(&self, method: Method, url: Url, params: Option<&P>) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        tracing::debug!(%method, %url, "sending request");

        let path = url.path().to_string();
        let mut builder = self
            .http_client
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.credentials.authorization()?);

        if let Some(params) = params {
            builder = if method == Method::GET || method == Method::DELETE {
                builder.query(params)
            } else {
                builder.json(params)
            };
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_client_error() || status.is_server_error() {
            tracing::warn!(
                %method,
                path = %path,
                status = status.as_u16(),
                body = %body,
                "request rejected"
            );
            return Err(LedgerxError::api_error(status, body));
        }

        if body.is_empty() {
            tracing::debug!(%method, path = %path, status = status.as_u16(), "empty response body");
            return Ok(status_payload(status.as_u16()));
        }

        serde_json::from_str(&body)
            .map_err(|err| LedgerxError::InvalidResponse(format!("{err}: {body}")))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(LedgerxError::Config(format!("base URL cannot carry a path: {raw}")));
    }
    Ok(url)
}

/// Append `segments` to the base path. Each segment is percent-encoded, so a
/// `/`, `?` or `#` inside an id never changes the endpoint.
fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url> {
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
        return Err(LedgerxError::InvalidArgument(format!(
            "`{segment}` is not a valid path segment"
        )));
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LedgerxError::Config(format!("base URL cannot carry a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
