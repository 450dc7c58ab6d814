use std::time::Duration;

use crate::error::{LogAnalyzerError, Result};

const USER_AGENT: &str = concat!("obs-log-analyzer/", env!("CARGO_PKG_VERSION"));

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on network failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using blocking reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Clone, Copy)]
pub struct ReqwestClient {
    timeout: Duration,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

fn fetch_error(url: &str, message: impl Into<String>) -> LogAnalyzerError {
    LogAnalyzerError::Fetch {
        url: url.to_string(),
        message: message.into(),
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| fetch_error(url, format!("failed to create HTTP client: {e}")))?;

        let response = client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                fetch_error(url, "request timed out")
            } else if e.is_connect() {
                fetch_error(url, "failed to connect")
            } else {
                fetch_error(url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(url, format!("HTTP {status}")));
        }

        response
            .text()
            .map_err(|e| fetch_error(url, format!("failed to read response: {e}")))
    }
}
