use super::*;

fn mixed_findings() -> Vec<Finding> {
    vec![
        Finding::info("KILLER NIC", "k"),
        Finding::critical("TWO INSTANCES", "t"),
        Finding::warning("WIFI STREAMING", "w"),
        Finding::critical("MP4 RECORDING", "m"),
        Finding::info("EMPTY LOG", "e"),
    ]
}

#[test]
fn partitions_by_severity_preserving_order() {
    let report = Report::from_findings(mixed_findings());

    let critical: Vec<_> = report
        .tier(Severity::Critical)
        .iter()
        .map(|f| f.title.as_str())
        .collect();
    assert_eq!(critical, vec!["TWO INSTANCES", "MP4 RECORDING"]);
    assert_eq!(report.tier(Severity::Warning).len(), 1);
    assert_eq!(report.tier(Severity::Info)[0].title, "KILLER NIC");
}

#[test]
fn partition_is_strict() {
    let findings = mixed_findings();
    let report = Report::from_findings(findings.clone());

    assert_eq!(report.len(), findings.len());
    for finding in &findings {
        let groups_containing = report
            .tiers()
            .filter(|(_, group)| group.contains(finding))
            .count();
        assert_eq!(groups_containing, 1);
    }
}

#[test]
fn iter_concatenates_tiers_in_order() {
    let report = Report::from_findings(mixed_findings());

    let titles: Vec<_> = report.iter().map(|f| f.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "TWO INSTANCES",
            "MP4 RECORDING",
            "WIFI STREAMING",
            "KILLER NIC",
            "EMPTY LOG"
        ]
    );
}

#[test]
fn summary_lists_titles_per_tier() {
    let report = Report::from_findings(mixed_findings());

    let summary = report.summary();

    assert_eq!(summary.len(), 3);
    assert_eq!(summary[0].severity, Severity::Critical);
    assert_eq!(summary[0].titles, vec!["TWO INSTANCES", "MP4 RECORDING"]);
    assert_eq!(summary[1].titles, vec!["WIFI STREAMING"]);
    assert_eq!(summary[2].titles, vec!["KILLER NIC", "EMPTY LOG"]);
}

#[test]
fn empty_report_still_has_three_summary_lines() {
    let report = Report::default();
    assert!(report.is_empty());
    assert_eq!(report.summary().len(), 3);
    assert!(report.summary().iter().all(|line| line.titles.is_empty()));
    assert_eq!(report.highest_severity(), None);
}

#[test]
fn highest_severity_skips_empty_tiers() {
    let report: Report = vec![Finding::info("A", "a"), Finding::warning("B", "b")]
        .into_iter()
        .collect();
    assert_eq!(report.highest_severity(), Some(Severity::Warning));
}
