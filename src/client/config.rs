//! Client configuration options.

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Fallback request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the UISP CRM client.
///
/// Immutable after construction. The app key is held as a
/// [`SecretString`] and never appears in `Debug` output.
///
/// # Example
///
/// ```
/// use uisp_crm_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new(
///     "https://uisp.example.com/crm/api/v1.0",
///     "app-key",
/// )?
/// .with_timeout(Duration::from_secs(60));
/// # Ok::<(), uisp_crm_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    app_key: SecretString,
    timeout: Duration,
    retries: Option<u32>,
}

impl ClientConfig {
    /// Create a configuration from the UISP instance base URL and an
    /// app key (UISP CRM → System → Security → App keys).
    ///
    /// A trailing slash on the base URL is stripped. Fails with a
    /// configuration error if either value is empty; no network call is
    /// made.
    pub fn new(base_url: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();
        let app_key: String = app_key.into();

        if base_url.is_empty() {
            return Err(Error::Generic {
                message: "baseUrl is required in ClientConfig".to_string(),
                status: None,
            });
        }
        if app_key.is_empty() {
            return Err(Error::Generic {
                message: "appKey is required in ClientConfig".to_string(),
                status: None,
            });
        }

        let base_url = base_url
            .strip_suffix('/')
            .map(str::to_string)
            .unwrap_or(base_url);

        Ok(Self {
            base_url,
            app_key: SecretString::new(app_key),
            timeout: DEFAULT_TIMEOUT,
            retries: None,
        })
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a retry count.
    ///
    /// Accepted for configuration-surface compatibility; the client never
    /// retries on its own. Callers wanting resilience layer it externally.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The default request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configured retry count, if any. Never consulted by the client.
    pub fn retries(&self) -> Option<u32> {
        self.retries
    }

    pub(crate) fn app_key(&self) -> &str {
        self.app_key.expose_secret()
    }
}

/// Per-request overrides merged over the client configuration.
///
/// Call-site headers override base headers key-by-key; the
/// `X-Auth-App-Key` header always comes from [`ClientConfig`] and cannot
/// be overridden. A call-site timeout replaces the configured default for
/// that request only.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Extra headers for this request
    pub headers: HashMap<String, String>,
    /// Timeout for this request, overriding the configured default
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the timeout for this request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let err = ClientConfig::new("", "key").unwrap_err();
        assert!(matches!(err, Error::Generic { .. }));
        assert!(err.message().contains("baseUrl"));
    }

    #[test]
    fn empty_app_key_is_rejected() {
        let err = ClientConfig::new("https://uisp.example.com", "").unwrap_err();
        assert!(err.message().contains("appKey"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config =
            ClientConfig::new("https://uisp.example.com/crm/api/v1.0/", "key").unwrap();
        assert_eq!(config.base_url(), "https://uisp.example.com/crm/api/v1.0");
    }

    #[test]
    fn default_timeout_is_thirty_seconds() {
        let config = ClientConfig::new("https://uisp.example.com", "key").unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.retries(), None);
    }

    #[test]
    fn request_config_builders() {
        let rc = RequestConfig::new()
            .with_header("X-Trace-Id", "abc")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(rc.headers.get("X-Trace-Id").map(String::as_str), Some("abc"));
        assert_eq!(rc.timeout, Some(Duration::from_secs(5)));
    }
}
