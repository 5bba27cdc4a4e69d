use std::error::Error;
use std::fmt;

use async_trait::async_trait;

use crate::core::state::FetchResult;

/// Errors that can occur while fetching the server message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Request could not be built or sent at all (TLS backend, malformed URL).
    Client(String),
    /// Network-level failure (timeout, DNS, connection refused or reset).
    Network(String),
    /// Server answered with something other than 200.
    Status { status: u16, reason: String },
    /// Headers arrived but the body could not be read.
    Body(String),
}

impl FetchError {
    /// Builds a message from `err` and every error in its source chain.
    ///
    /// reqwest's top-level message is often just "error sending request";
    /// the useful part ("Connection refused") sits further down.
    pub fn describe(err: &dyn Error) -> String {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "client error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, reason } if reason.is_empty() => {
                write!(f, "received non-OK HTTP status: {status}")
            }
            FetchError::Status { status, reason } => {
                write!(f, "received non-OK HTTP status: {status} {reason}")
            }
            FetchError::Body(msg) => write!(f, "failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<Result<String, FetchError>> for FetchResult {
    fn from(result: Result<String, FetchError>) -> Self {
        match result {
            Ok(body) => FetchResult::Success { body },
            Err(e) => FetchResult::Failure {
                reason: e.to_string(),
            },
        }
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Where the request goes, for logging.
    fn target(&self) -> &str;

    /// Performs the GET and returns the body of a 200 response.
    async fn fetch(&self) -> Result<String, FetchError>;

    /// Same as `fetch`, folded into the outcome the Display Loop stores.
    async fn fetch_result(&self) -> FetchResult {
        self.fetch().await.into()
    }
}
