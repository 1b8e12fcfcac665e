// JSON fetching over HTTP.
// One GET per call, body parsed as JSON; no caching, retries or status checks.

use std::future::Future;

use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{GhorgError, Result};

/// Source of JSON documents addressed by URL.
///
/// Implementations perform exactly one request per call and hand back
/// transport errors unchanged.
pub trait FetchJson {
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value>>;
}

/// [`FetchJson`] over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher that sends GitHub's JSON media type and the configured
    /// user agent on every request.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| GhorgError::Config(format!("invalid user agent: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl FetchJson for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(url, %status, bytes = body.len(), "response received");

        let value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}

/// Fetch `url` with a default-configured [`HttpFetcher`] and parse the body.
pub async fn get_json(url: &str) -> Result<Value> {
    HttpFetcher::new(&ClientConfig::default())?
        .fetch_json(url)
        .await
}
