mod error_output;
mod json;
mod progress;
mod text;
mod theme;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use progress::FetchProgress;
pub use text::{TextFormatter, render_links};
pub use theme::{ColorMode, RenderTheme};

use crate::error::Result;
use crate::report::Report;

/// Trait for rendering a report into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// ANSI escape codes used across terminal output.
mod ansi {
    pub const RED: &str = "\x1b[1;31m";
    pub const YELLOW: &str = "\x1b[0;33m";
    pub const CYAN: &str = "\x1b[1;36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
