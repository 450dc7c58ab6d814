use std::io::IsTerminal;

use crate::rules::Severity;

use super::ansi;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Per-tier escape sequences injected into the text formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTheme {
    critical: &'static str,
    warning: &'static str,
    info: &'static str,
    reset: &'static str,
}

impl RenderTheme {
    pub const ANSI: Self = Self {
        critical: ansi::RED,
        warning: ansi::YELLOW,
        info: ansi::CYAN,
        reset: ansi::RESET,
    };

    pub const PLAIN: Self = Self {
        critical: "",
        warning: "",
        info: "",
        reset: "",
    };

    #[must_use]
    pub fn for_mode(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        if use_colors { Self::ANSI } else { Self::PLAIN }
    }

    #[must_use]
    pub const fn color(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    /// Wrap `text` in the tier's color, or return it unchanged for a plain theme.
    #[must_use]
    pub fn paint(&self, severity: Severity, text: &str) -> String {
        let color = self.color(severity);
        if color.is_empty() {
            return text.to_string();
        }
        format!("{color}{text}{}", self.reset)
    }
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self::for_mode(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
