//! Orchestration: gate, then the catalog, then aggregation.

use tracing::{debug, info};

use crate::error::Result;
use crate::logfile::{LogView, StructureIndex};
use crate::rules::{Finding, GateDecision, RuleCatalog, SceneSurvey, legacy_version};
use crate::source::{LogFetcher, PasteUrl};

const NO_LOG_TITLE: &str = "NO LOG";
const NO_LOG_MESSAGE: &str = "URL contains no Github Gist link.";

/// Single Critical finding reported when the input URL is not a paste link.
#[must_use]
pub fn no_log_finding() -> Finding {
    Finding::critical(NO_LOG_TITLE, NO_LOG_MESSAGE)
}

/// Runs the rule catalog over one log.
///
/// The legacy-version gate always runs first. A gated log terminates with
/// the gate's finding alone; an open log runs every whole-log rule and then
/// the per-scene rules.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPipeline {
    catalog: RuleCatalog,
    scene_survey: SceneSurvey,
}

impl AnalysisPipeline {
    #[must_use]
    pub const fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog,
            scene_survey: SceneSurvey::FirstViolation,
        }
    }

    #[must_use]
    pub const fn with_scene_survey(mut self, survey: SceneSurvey) -> Self {
        self.scene_survey = survey;
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Ordered findings for one log. Deterministic for a given view.
    #[must_use]
    pub fn analyze(&self, view: &LogView) -> Vec<Finding> {
        match legacy_version(view) {
            GateDecision::Gated(finding) => {
                info!("Legacy OBS Classic log detected, skipping remaining rules");
                vec![finding]
            }
            GateDecision::Open => self.run_all(view),
        }
    }

    fn run_all(&self, view: &LogView) -> Vec<Finding> {
        let structure = StructureIndex::build(view);
        debug!(
            lines = view.len(),
            sections = structure.sections().len(),
            scenes = structure.scenes().len(),
            "Indexed log structure"
        );

        let mut findings = self.catalog.run_log_rules(view);
        findings.extend(
            self.catalog
                .run_scene_rules(view, &structure, self.scene_survey),
        );
        info!(findings = findings.len(), "Analysis complete");
        findings
    }

    /// Validate `url`, fetch the log and analyze it.
    ///
    /// A URL that is not a paste link yields the single "NO LOG" finding.
    ///
    /// # Errors
    /// Returns an error when the log text cannot be fetched.
    pub fn analyze_url(&self, url: &str, fetcher: &impl LogFetcher) -> Result<Vec<Finding>> {
        let Some(paste) = PasteUrl::parse(url) else {
            info!(url, "Input is not a paste link");
            return Ok(vec![no_log_finding()]);
        };
        let view = fetcher.fetch(&paste)?;
        Ok(self.analyze(&view))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
