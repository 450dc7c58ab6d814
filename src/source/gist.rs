use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{LogAnalyzerError, Result};
use crate::logfile::LogView;

use super::{HttpClient, PasteUrl, ReqwestClient};

/// Anything that can turn a validated paste link into log lines.
pub trait LogFetcher {
    /// # Errors
    /// Returns an error when the log text cannot be obtained.
    fn fetch(&self, paste: &PasteUrl) -> Result<LogView>;
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    #[serde(default)]
    files: IndexMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    #[serde(default)]
    content: Option<String>,
}

/// Parse a gist API response and split its first file into lines.
///
/// # Errors
/// Returns an error if the body is not valid JSON or carries no file content.
pub fn parse_gist(body: &str) -> Result<LogView> {
    let gist: GistResponse = serde_json::from_str(body)?;
    let (name, file) = gist
        .files
        .first()
        .ok_or_else(|| LogAnalyzerError::MissingContent("gist has no files".to_string()))?;
    let content = file
        .content
        .as_deref()
        .ok_or_else(|| LogAnalyzerError::MissingContent(format!("file '{name}' has no content")))?;
    Ok(LogView::from_text(content))
}

/// Fetches logs from the GitHub gist API.
#[derive(Debug, Clone)]
pub struct GistFetcher<C: HttpClient = ReqwestClient> {
    client: C,
    api_url: String,
    retries: u32,
}

impl GistFetcher<ReqwestClient> {
    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::with_client(
            ReqwestClient::new(config.timeout()),
            &config.api_url,
            config.retries,
        )
    }
}

impl<C: HttpClient> GistFetcher<C> {
    #[must_use]
    pub fn with_client(client: C, api_url: &str, retries: u32) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            retries,
        }
    }

    #[must_use]
    pub fn endpoint(&self, paste: &PasteUrl) -> String {
        format!("{}/gists/{}", self.api_url, paste.id())
    }

    fn get_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.client.get(url) {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.retries => {
                    attempt += 1;
                    warn!(url, attempt, error = %err, "Fetch failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl<C: HttpClient> LogFetcher for GistFetcher<C> {
    fn fetch(&self, paste: &PasteUrl) -> Result<LogView> {
        let endpoint = self.endpoint(paste);
        debug!(%endpoint, "Fetching gist");
        let body = self.get_with_retry(&endpoint)?;
        let view = parse_gist(&body)?;
        debug!(lines = view.len(), "Fetched log");
        Ok(view)
    }
}

#[cfg(test)]
#[path = "gist_tests.rs"]
mod tests;
