//! Percentage-tiered rules: the worst `(NN.N%)` figure on matching lines
//! decides the severity.

use crate::logfile::LogView;

use super::{Finding, Severity};

pub const CRITICAL_PERCENT: f64 = 15.0;
pub const WARNING_PERCENT: f64 = 5.0;

/// A phrase to scan for plus the texts used when it crosses a tier.
#[derive(Debug, Clone, Copy)]
pub struct PercentageRule {
    pub phrase: &'static str,
    pub title_suffix: &'static str,
    pub message: &'static str,
}

pub const DROPPED_FRAMES: PercentageRule = PercentageRule {
    phrase: "insufficient bandwidth",
    title_suffix: "FRAMEDROPS",
    message: "Your log contains streaming sessions with dropped frames. This can only be caused by a failure in your internet connection or your networking hardware. It is not caused by OBS. Follow the troubleshooting steps at: <a href=\"https://obsproject.com/wiki/Dropped-Frames-and-General-Connection-Issues\">Dropped Frames and General Connection Issues</a>",
};

pub const RENDERING_LAG: PercentageRule = PercentageRule {
    phrase: "rendering lag",
    title_suffix: "RENDERING LAG",
    message: "Your GPU is maxed out and OBS can't render scenes fast enough. Running a game without vertical sync or a frame rate limiter will frequently cause performance issues with OBS because your GPU will be maxed out. Enable vsync or set a reasonable frame rate limit that your GPU can handle without hitting 100% usage. If that's not enough you may also need to turn down some of the video quality options in the game.",
};

pub const ENCODER_OVERLOAD: PercentageRule = PercentageRule {
    phrase: "skipped frames",
    title_suffix: "CPU OVERLOAD",
    message: "The encoder is skipping frames because of CPU overload. Read about <a href=\"https://obsproject.com/wiki/General-Performance-and-Encoding-Issues\">General Performance and Encoding Issues</a>",
};

impl PercentageRule {
    #[must_use]
    pub fn evaluate(&self, view: &LogView) -> Option<Finding> {
        let worst = max_percentage(view, self.phrase);
        let severity = tier(worst)?;
        Some(Finding::new(
            severity,
            format!("{}% {}", format_percent(worst), self.title_suffix),
            self.message,
        ))
    }
}

/// Severity for a percentage: `>=15` Critical, `[5, 15)` Warning,
/// `(0, 5)` Info, and nothing for zero.
#[must_use]
pub fn tier(percent: f64) -> Option<Severity> {
    if percent >= CRITICAL_PERCENT {
        Some(Severity::Critical)
    } else if percent >= WARNING_PERCENT {
        Some(Severity::Warning)
    } else if percent > 0.0 {
        Some(Severity::Info)
    } else {
        None
    }
}

/// Value between the first `(` and the first `)` of a line, `%` stripped.
#[must_use]
pub fn extract_percentage(line: &str) -> Option<f64> {
    let open = line.find('(')?;
    let close = line.find(')')?;
    line.get(open + 1..close)?
        .trim()
        .trim_matches('%')
        .trim()
        .parse()
        .ok()
}

/// Largest percentage over every line containing `phrase`; `0.0` when none parse.
#[must_use]
pub fn max_percentage(view: &LogView, phrase: &str) -> f64 {
    view.search(phrase)
        .into_iter()
        .filter_map(extract_percentage)
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

/// Render like a float literal: `17.2`, `5.0`, `0.25`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[must_use]
pub fn dropped_frames(view: &LogView) -> Option<Finding> {
    DROPPED_FRAMES.evaluate(view)
}

#[must_use]
pub fn rendering_lag(view: &LogView) -> Option<Finding> {
    RENDERING_LAG.evaluate(view)
}

#[must_use]
pub fn encoder_overload(view: &LogView) -> Option<Finding> {
    ENCODER_OVERLOAD.evaluate(view)
}

#[cfg(test)]
#[path = "percentage_tests.rs"]
mod tests;
