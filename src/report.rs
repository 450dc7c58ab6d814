//! Severity-partitioned view of a finding list.

use serde::Serialize;

use crate::rules::{Finding, Severity};

/// Findings grouped by tier, discovery order kept within each tier.
///
/// Every finding lands in exactly one group; walking the groups in
/// Critical, Warning, Info order visits each finding once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    critical: Vec<Finding>,
    warning: Vec<Finding>,
    info: Vec<Finding>,
}

/// One summary line: a tier and the titles in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine<'a> {
    pub severity: Severity,
    pub titles: Vec<&'a str>,
}

impl Report {
    #[must_use]
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        let mut report = Self::default();
        for finding in findings {
            report.group_mut(finding.severity).push(finding);
        }
        report
    }

    fn group_mut(&mut self, severity: Severity) -> &mut Vec<Finding> {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::Warning => &mut self.warning,
            Severity::Info => &mut self.info,
        }
    }

    #[must_use]
    pub fn tier(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }

    /// `(severity, findings)` for every tier, most severe first.
    pub fn tiers(&self) -> impl Iterator<Item = (Severity, &[Finding])> {
        Severity::DESCENDING
            .into_iter()
            .map(move |severity| (severity, self.tier(severity)))
    }

    /// Titles per tier, in discovery order.
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryLine<'_>> {
        self.tiers()
            .map(|(severity, findings)| SummaryLine {
                severity,
                titles: findings.iter().map(|f| f.title.as_str()).collect(),
            })
            .collect()
    }

    /// All findings in report order: Critical, then Warning, then Info.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.tiers().flat_map(|(_, findings)| findings.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.info.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.tiers()
            .find(|(_, findings)| !findings.is_empty())
            .map(|(severity, _)| severity)
    }
}

impl FromIterator<Finding> for Report {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        Self::from_findings(iter)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
