use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a paste is downloaded.
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct FetchProgress {
    spinner: ProgressBar,
}

impl FetchProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let spinner = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };
        Self { spinner }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.set_message("Fetching log...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.spinner.is_hidden()
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
