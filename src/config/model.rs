use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LogAnalyzerError, Result};
use crate::rules::SceneSurvey;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Root configuration, loaded from `.obs-log-analyzer.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// How raw log text is retrieved from the paste service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchConfig {
    /// Base URL of the gist API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts after a failed request.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Text report layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Column at which finding messages wrap.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Spaces in front of every message line.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            indent: default_indent(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// `first-violation` stops the scene survey at the first scene with
    /// duplicate game captures; `all` checks every scene.
    #[serde(default)]
    pub scene_survey: SceneSurvey,
}

impl Config {
    /// Reject values that would make fetching or rendering meaningless.
    ///
    /// # Errors
    /// Returns a configuration error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.api_url.trim().is_empty() {
            return Err(LogAnalyzerError::Config(
                "fetch.api_url must not be empty".to_string(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(LogAnalyzerError::Config(
                "fetch.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.report.wrap_width <= self.report.indent {
            return Err(LogAnalyzerError::Config(format!(
                "report.wrap_width ({}) must exceed report.indent ({})",
                self.report.wrap_width, self.report.indent
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_retries() -> u32 {
    1
}

const fn default_wrap_width() -> usize {
    80
}

const fn default_indent() -> usize {
    4
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
