use super::*;

#[test]
fn severity_total_order() {
    assert!(Severity::Critical > Severity::Warning);
    assert!(Severity::Warning > Severity::Info);
    assert_eq!(
        Severity::DESCENDING.iter().max(),
        Some(&Severity::Critical)
    );
}

#[test]
fn severity_levels_match_tiers() {
    assert_eq!(Severity::Info.level(), 1);
    assert_eq!(Severity::Warning.level(), 2);
    assert_eq!(Severity::Critical.level(), 3);
}

#[test]
fn severity_display_uses_label() {
    assert_eq!(Severity::Warning.to_string(), "Warning");
}

#[test]
fn constructors_set_severity() {
    assert_eq!(Finding::critical("A", "a").severity, Severity::Critical);
    assert_eq!(Finding::warning("B", "b").severity, Severity::Warning);
    let info = Finding::info("C", "c");
    assert_eq!(info.severity, Severity::Info);
    assert_eq!(info.title, "C");
    assert_eq!(info.message, "c");
}

#[test]
fn severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Critical).unwrap();
    assert_eq!(json, "\"critical\"");
}
