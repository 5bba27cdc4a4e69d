//! HTTP Fetcher backed by reqwest.
//!
//! One plain GET, no headers, no body, no retries. Only a 200 counts as
//! success; the body is returned exactly as received (invalid UTF-8 is
//! replaced, nothing else is touched).

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use crate::client::{FetchError, Fetcher};

pub struct HttpFetcher {
    url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(FetchError::describe(&e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn target(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        info!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", self.url, e);
                if e.is_builder() {
                    // Malformed URL: nothing was sent.
                    FetchError::Client(FetchError::describe(&e))
                } else {
                    FetchError::Network(FetchError::describe(&e))
                }
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            warn!("Non-OK status from {}: {}", self.url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // Raw bytes, not `text()`: no charset transcoding, BOM kept.
        let bytes = response.bytes().await.map_err(|e| {
            warn!("Reading body from {} failed: {}", self.url, e);
            FetchError::Body(FetchError::describe(&e))
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        // Body contents stay out of the log.
        info!("Received {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
