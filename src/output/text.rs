use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::report::Report;
use crate::rules::Severity;

use super::{OutputFormatter, RenderTheme};

const DETAILS_RULE: &str = "--------------------------------------";

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s+href="([^"]*)"\s*>(.*?)</a>"#).expect("Invalid regex")
});

/// Replace `<a href="URL">TEXT</a>` with `TEXT (URL)`, or just `URL` when
/// the link text is the URL itself.
#[must_use]
pub fn render_links(message: &str) -> String {
    ANCHOR
        .replace_all(message, |caps: &regex::Captures<'_>| {
            let url = &caps[1];
            let text = caps[2].trim();
            if text.is_empty() || text == url {
                url.to_string()
            } else {
                format!("{text} ({url})")
            }
        })
        .into_owned()
}

/// Renders a summary block followed by wrapped per-tier details.
pub struct TextFormatter {
    theme: RenderTheme,
    layout: ReportConfig,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(theme: RenderTheme) -> Self {
        Self {
            theme,
            layout: ReportConfig {
                wrap_width: 80,
                indent: 4,
            },
        }
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: ReportConfig) -> Self {
        self.layout = layout;
        self
    }

    fn wrap(&self, message: &str) -> String {
        let indent = " ".repeat(self.layout.indent);
        let options = textwrap::Options::new(self.layout.wrap_width)
            .initial_indent(&indent)
            .subsequent_indent(&indent);
        textwrap::fill(render_links(message).trim(), options)
    }

    fn format_summary(&self, report: &Report, output: &mut String) {
        for line in report.summary() {
            let heading = format!("{}:", line.severity.label());
            let text = format!("{heading:<9} {}", line.titles.join(", "));
            let _ = writeln!(output, "{}", self.theme.paint(line.severity, text.trim_end()));
        }
    }

    fn format_tier(&self, severity: Severity, report: &Report, output: &mut String) {
        let _ = writeln!(output, "\n{}:", severity.label());
        for finding in report.tier(severity) {
            let _ = writeln!(output, "{}", self.theme.paint(severity, &finding.title));
            let _ = writeln!(output, "{}", self.wrap(&finding.message));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(RenderTheme::default())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        self.format_summary(report, &mut output);

        let _ = writeln!(output, "\n{DETAILS_RULE}\n\nDetails");
        for severity in Severity::DESCENDING {
            self.format_tier(severity, report, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
