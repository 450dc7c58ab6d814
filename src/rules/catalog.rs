use serde::{Deserialize, Serialize};

use crate::logfile::{LogView, SceneRange, StructureIndex};

use super::{Finding, bitrate, existence, hardware, percentage, scenes};

pub type LogCheck = fn(&LogView) -> Option<Finding>;
pub type SceneCheck = fn(&LogView, SceneRange) -> Vec<Finding>;

#[derive(Debug, Clone, Copy)]
enum Check {
    Log(LogCheck),
    Scene(SceneCheck),
}

/// How far the per-scene rules survey the scene list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneSurvey {
    /// Stop after the first scene in which a halting rule fired.
    #[default]
    FirstViolation,
    /// Evaluate every scene.
    All,
}

/// A named, independent diagnostic check.
///
/// Whole-log rules see the entire [`LogView`]; scene rules are evaluated once
/// per [`SceneRange`]. Both are invoked through [`Rule::evaluate`].
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    id: &'static str,
    check: Check,
    halts_survey: bool,
}

impl Rule {
    #[must_use]
    pub const fn log(id: &'static str, check: LogCheck) -> Self {
        Self {
            id,
            check: Check::Log(check),
            halts_survey: false,
        }
    }

    #[must_use]
    pub const fn scene(id: &'static str, check: SceneCheck) -> Self {
        Self {
            id,
            check: Check::Scene(check),
            halts_survey: false,
        }
    }

    /// Mark a scene rule whose findings end a [`SceneSurvey::FirstViolation`] survey.
    #[must_use]
    pub const fn halting(mut self) -> Self {
        self.halts_survey = true;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn is_scene_rule(&self) -> bool {
        matches!(self.check, Check::Scene(_))
    }

    #[must_use]
    pub const fn halts_survey(&self) -> bool {
        self.halts_survey
    }

    /// Run the rule. Scene rules need a range and yield nothing without one;
    /// whole-log rules ignore it.
    #[must_use]
    pub fn evaluate(&self, view: &LogView, range: Option<SceneRange>) -> Vec<Finding> {
        match (self.check, range) {
            (Check::Log(check), _) => check(view).into_iter().collect(),
            (Check::Scene(check), Some(range)) => check(view, range),
            (Check::Scene(_), None) => Vec::new(),
        }
    }
}

/// Ordered list of rules. Order only decides display order within a tier.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleCatalog {
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Every built-in rule except the legacy-version gate.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Rule::log("dual-instance", existence::dual_instance),
            Rule::log("autoconfig-wizard", existence::autoconfig_wizard),
            Rule::log("weak-cpu", hardware::weak_cpu),
            Rule::log("integrated-gpu", hardware::integrated_gpu),
            Rule::log("init-failure", existence::init_failure),
            Rule::log("killer-nic", existence::killer_nic),
            Rule::log("wireless-adapter", existence::wireless_adapter),
            Rule::log("admin-privileges", existence::admin_privileges),
            Rule::log("empty-session", existence::empty_session),
            Rule::log("mp4-container", existence::mp4_container),
            Rule::log("mov-container", existence::mov_container),
            Rule::log("slow-preset", existence::slow_preset),
            Rule::log("dropped-frames", percentage::dropped_frames),
            Rule::log("rendering-lag", percentage::rendering_lag),
            Rule::log("encoder-overload", percentage::encoder_overload),
            Rule::log("shared-memory-capture", existence::shared_memory_capture),
            Rule::log("x264-stream-bitrate", bitrate::x264_stream_bitrate),
            Rule::log("nvenc-stream-bitrate", bitrate::nvenc_stream_bitrate),
            Rule::scene("capture-interference", scenes::capture_interference),
            Rule::scene("duplicate-game-capture", scenes::duplicate_game_capture).halting(),
        ])
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every whole-log rule, in catalog order.
    #[must_use]
    pub fn run_log_rules(&self, view: &LogView) -> Vec<Finding> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_scene_rule())
            .flat_map(|rule| {
                let findings = rule.evaluate(view, None);
                tracing::debug!(rule = rule.id(), findings = findings.len(), "Rule evaluated");
                findings
            })
            .collect()
    }

    /// Scene rules over every scene range, scene by scene.
    ///
    /// A log without scene declarations yields the single "no scenes" finding.
    #[must_use]
    pub fn run_scene_rules(
        &self,
        view: &LogView,
        structure: &StructureIndex,
        survey: SceneSurvey,
    ) -> Vec<Finding> {
        let ranges = structure.scene_ranges();
        if ranges.is_empty() {
            return vec![scenes::no_scenes()];
        }
        tracing::debug!(scenes = ranges.len(), "Surveying scenes");

        let mut findings = Vec::new();
        for range in ranges {
            let mut halted = false;
            for rule in self.rules.iter().filter(|rule| rule.is_scene_rule()) {
                let scene_findings = rule.evaluate(view, Some(range));
                halted |= rule.halts_survey() && !scene_findings.is_empty();
                findings.extend(scene_findings);
            }
            if halted && survey == SceneSurvey::FirstViolation {
                tracing::debug!(scene_start = range.start, "Scene survey stopped at first violation");
                break;
            }
        }
        findings
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
