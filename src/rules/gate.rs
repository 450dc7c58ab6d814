use crate::logfile::LogView;

use super::Finding;

const LEGACY_MARKER: &str = "Open Broadcaster Software";

const LEGACY_MESSAGE: &str = "You are still using OBS Classic, please note that this version is no longer supported. While we cannot and will not do anything to prevent you from using it, we cannot help with any issues that may come up. It is recommended that you update to OBS Studio. Further information on why you should update (and how): <a href=\"https://obsproject.com/forum/threads/how-to-easily-switch-to-obs-studio.55820/\">OBS Classic to OBS Studio</a>";

/// Outcome of the legacy-version gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Log comes from the legacy product; nothing else may run.
    Gated(Finding),
    /// Modern log; the rest of the catalog runs.
    Open,
}

impl GateDecision {
    #[must_use]
    pub const fn is_gated(&self) -> bool {
        matches!(self, Self::Gated(_))
    }
}

/// Detect logs written by OBS Classic, which modern analysis cannot read.
#[must_use]
pub fn legacy_version(view: &LogView) -> GateDecision {
    if view.contains(LEGACY_MARKER) {
        GateDecision::Gated(Finding::critical("OBS CLASSIC", LEGACY_MESSAGE))
    } else {
        GateDecision::Open
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
