use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogAnalyzerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch log from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Paste contains no log file: {0}")]
    MissingContent(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogAnalyzerError {
    /// Short category label used when printing the error to stderr.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Fetch { .. } | Self::MissingContent(_) => "Fetch",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::Json(_) => "Parse",
        }
    }

    /// Actionable hint shown under the error, if one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Fetch { .. } => Some("Check your connection and that the gist is public"),
            Self::MissingContent(_) => {
                Some("Upload the log again via Help > Log Files > Upload Current Log File")
            }
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check .obs-log-analyzer.toml or run with --no-config")
            }
            Self::FileRead { .. } | Self::Io(_) | Self::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogAnalyzerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
