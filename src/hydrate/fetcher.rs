//! HTTP document fetcher
//!
//! This module retrieves raw content documents for the hydrator:
//! - Building HTTP clients with a proper user agent string
//! - GET requests for document text
//! - Error classification into a result the caller can match on
//!
//! Fetching never raises: every failure mode is reported as a
//! [`FetchOutcome::Failure`] with a classified reason. There is no retry
//! and no caching; the hydrator resolves failures by fallback substitution
//! instead.

use crate::config::ClientConfig;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::time::Duration;

/// Result of a document fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the document
    Success {
        /// The document body text
        text: String,
        /// HTTP status code
        status_code: u16,
        /// Hex-encoded SHA-256 of the body, for change diagnostics
        content_hash: String,
    },

    /// The document could not be retrieved
    Failure {
        /// The classified reason
        reason: FetchFailure,
    },
}

/// Classified fetch failure reasons
///
/// Reasons are logged for diagnostics only; they are never surfaced past
/// the hydrator boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Non-success HTTP status
    Status(u16),

    /// Request timed out
    Timeout,

    /// Connection could not be established
    Connect,

    /// The response body could not be read
    Body(String),

    /// Any other request error
    Request(String),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Timeout => write!(f, "request timeout"),
            Self::Connect => write!(f, "connection failed"),
            Self::Body(e) => write!(f, "body read failed: {}", e),
            Self::Request(e) => write!(f, "request failed: {}", e),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The client identification configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use folio_loom::config::ClientConfig;
/// use folio_loom::hydrate::build_http_client;
///
/// let config = ClientConfig {
///     agent_name: "FolioLoom".to_string(),
///     agent_version: "1.0".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    // Format: AgentName/Version
    let user_agent = format!("{}/{}", config.agent_name, config.agent_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a content document
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The resolved document URL
///
/// # Returns
///
/// A FetchOutcome indicating success or the classified failure
pub async fn fetch_document(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchOutcome::Failure {
                    reason: FetchFailure::Status(status.as_u16()),
                };
            }

            match response.text().await {
                Ok(text) => {
                    let mut hasher = Sha256::new();
                    hasher.update(text.as_bytes());
                    let content_hash = hex::encode(hasher.finalize());

                    FetchOutcome::Success {
                        text,
                        status_code: status.as_u16(),
                        content_hash,
                    }
                }
                Err(e) => FetchOutcome::Failure {
                    reason: FetchFailure::Body(e.to_string()),
                },
            }
        }
        Err(e) => {
            // Classify error
            let reason = if e.is_timeout() {
                FetchFailure::Timeout
            } else if e.is_connect() {
                FetchFailure::Connect
            } else {
                FetchFailure::Request(e.to_string())
            };
            FetchOutcome::Failure { reason }
        }
    }
}
