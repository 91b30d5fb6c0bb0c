//! Page retrieval with optional relay routing.
//!
//! Requests go either directly to the target URL or, when a relay prefix
//! is configured, to `<prefix><percent-encoded target URL>`; the relay is
//! expected to hand back the target page's body transparently. Redirects
//! are followed. Every failure path resolves to a tagged outcome rather
//! than an error: a URL that cannot be fetched is still a valid row in
//! the report.

use tracing::{debug, warn};

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// Outcome of one page fetch.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The transport completed; `ok` reflects a 2xx status and the body
    /// is carried even for non-2xx responses.
    Response {
        /// HTTP status code.
        status: u16,
        /// Whether `status` encodes a successful HTTP result.
        ok: bool,
        /// Response body decoded to UTF-8.
        body: String,
    },

    /// The request never completed (DNS, connect, TLS, timeout, or a
    /// body read cut short), with a human-readable message.
    TransportError(String),
}

/// HTTP client for page checks.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    relay_prefix: Option<String>,
}

impl Fetcher {
    /// Build a client with the configured user agent and timeout.
    pub fn new(options: &Options) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            client,
            relay_prefix: options.relay_prefix.clone(),
        })
    }

    /// The URL actually requested for a target: the target itself, or the
    /// relay endpoint with the target percent-encoded and appended.
    #[must_use]
    pub fn request_target(&self, url: &str) -> String {
        match &self.relay_prefix {
            Some(prefix) => format!("{prefix}{}", percent_encode(url)),
            None => url.to_string(),
        }
    }

    /// GET a page and classify the outcome. Never returns an error.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let target = self.request_target(url);
        debug!(%url, %target, "fetching");

        let response = match self.client.get(&target).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "transport failure");
                return FetchOutcome::TransportError(e.to_string());
            }
        };

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        match response.bytes().await {
            Ok(bytes) => FetchOutcome::Response {
                status,
                ok,
                body: encoding::decode_body(&bytes, content_type.as_deref()),
            },
            Err(e) => {
                warn!(%url, error = %e, "body read failure");
                FetchOutcome::TransportError(e.to_string())
            }
        }
    }
}

/// Percent-encode a URL for use as a relay query value.
fn percent_encode(url: &str) -> String {
    url::form_urlencoded::byte_serialize(url.as_bytes()).collect()
}
