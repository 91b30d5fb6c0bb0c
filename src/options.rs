//! Configuration options for URL checks.
//!
//! The `Options` struct controls fetch behavior. Use `Default::default()`
//! for standard settings.

use std::time::Duration;

/// Relay endpoint used when none is configured explicitly.
///
/// The relay is invoked as `<prefix><percent-encoded target URL>` and is
/// expected to return the target page's body transparently. Required when
/// running from origins the target does not allow cross-origin; harmless
/// but slower otherwise.
pub const DEFAULT_RELAY_PREFIX: &str = "https://cors-proxy.fortranks564.workers.dev/?url=";

/// Configuration options for page fetching.
///
/// # Example
///
/// ```rust
/// use sitecheck::Options;
///
/// // Direct fetches, no relay
/// let options = Options::default();
///
/// // Route through the default public relay
/// let options = Options {
///     relay_prefix: Some(sitecheck::DEFAULT_RELAY_PREFIX.to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Relay endpoint prefix; the percent-encoded target URL is appended.
    ///
    /// `None` fetches the target directly.
    ///
    /// Default: `None`
    pub relay_prefix: Option<String>,

    /// User-Agent header sent with every request.
    ///
    /// Default: `"Mozilla/5.0 (compatible; SitecheckBot/0.1)"`
    pub user_agent: String,

    /// Per-request timeout. The original browser tool had none and a hung
    /// request stalled the whole batch; here a stuck URL resolves to a
    /// transport-failure record instead.
    ///
    /// `None` disables the timeout.
    ///
    /// Default: `Some(30s)`
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            relay_prefix: None,
            user_agent: "Mozilla/5.0 (compatible; SitecheckBot/0.1)".to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}
