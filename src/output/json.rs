use serde::Serialize;

use crate::error::Result;
use crate::report::{Report, SummaryLine};
use crate::rules::Severity;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    total: usize,
    highest_severity: Option<Severity>,
    summary: Vec<SummaryLine<'a>>,
    details: Vec<TierDetails<'a>>,
}

#[derive(Serialize)]
struct TierDetails<'a> {
    severity: Severity,
    findings: Vec<FindingEntry<'a>>,
}

#[derive(Serialize)]
struct FindingEntry<'a> {
    title: &'a str,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            total: report.len(),
            highest_severity: report.highest_severity(),
            summary: report.summary(),
            details: report
                .tiers()
                .map(|(severity, findings)| TierDetails {
                    severity,
                    findings: findings
                        .iter()
                        .map(|f| FindingEntry {
                            title: &f.title,
                            message: &f.message,
                        })
                        .collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
