use super::*;
use crate::error::LogAnalyzerError;
use crate::rules::Severity;

const SEP: &str = "21:00:01.000: ------------------------------------------------";
const GIST: &str = "https://gist.github.com/0123456789abcdef0123456789abcdef";

fn healthy_stream() -> Vec<String> {
    vec![
        "21:00:00.000: CPU Name: AMD Ryzen 7 3700X 8-Core Processor".to_string(),
        "21:00:00.001: Running as administrator: true".to_string(),
        SEP.to_string(),
        "21:00:01.001: Loaded scenes:".to_string(),
        "21:00:01.002: - scene 'Main':".to_string(),
        "21:00:01.003:     - source: 'Camera' (dshow_input)".to_string(),
        SEP.to_string(),
        "21:00:02.000: ==== Streaming Start ===============================================".to_string(),
    ]
}

fn view_of(lines: Vec<String>) -> LogView {
    LogView::new(lines)
}

struct StaticFetcher {
    lines: Option<Vec<String>>,
}

impl LogFetcher for StaticFetcher {
    fn fetch(&self, paste: &PasteUrl) -> Result<LogView> {
        self.lines.clone().map(LogView::new).ok_or_else(|| LogAnalyzerError::Fetch {
            url: paste.to_string(),
            message: "HTTP 404 Not Found".to_string(),
        })
    }
}

#[test]
fn healthy_log_has_no_findings() {
    let findings = AnalysisPipeline::default().analyze(&view_of(healthy_stream()));
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");
}

#[test]
fn legacy_log_yields_only_gate_finding() {
    let mut lines = healthy_stream();
    lines.insert(0, "Open Broadcaster Software v0.659b - 32bit".to_string());
    lines.push("21:00:03.000: Warning: OBS is already running!".to_string());

    let findings = AnalysisPipeline::default().analyze(&view_of(lines));

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].title, "OBS CLASSIC");
    assert_eq!(findings[0].severity, Severity::Critical);
}

#[test]
fn heavy_frame_drops_are_critical() {
    let mut lines = healthy_stream();
    lines.push(
        "21:30:00.000: Output 'simple_stream': Number of dropped frames due to insufficient bandwidth/connection stalls: 1720 (17.2%)".to_string(),
    );

    let findings = AnalysisPipeline::default().analyze(&view_of(lines));

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].title, "17.2% FRAMEDROPS");
    assert_eq!(findings[0].severity, Severity::Critical);
}

#[test]
fn analysis_is_deterministic() {
    let mut lines = healthy_stream();
    lines.push("21:00:03.000: Warning: OBS is already running!".to_string());
    lines.push("21:00:04.000: Interface: Killer E2200 Gigabit".to_string());
    let view = view_of(lines);
    let pipeline = AnalysisPipeline::default();

    assert_eq!(pipeline.analyze(&view), pipeline.analyze(&view));
}

#[test]
fn log_rules_precede_scene_findings() {
    let mut lines = healthy_stream();
    lines.insert(5, "21:00:01.004:     - source: 'Game' (game_capture)".to_string());
    lines.insert(6, "21:00:01.005:     - source: 'Screen' (monitor_capture)".to_string());
    lines.push("21:00:03.000: Warning: OBS is already running!".to_string());

    let findings = AnalysisPipeline::default().analyze(&view_of(lines));
    let titles: Vec<_> = findings.iter().map(|f| f.title.as_str()).collect();

    assert_eq!(titles, vec!["TWO INSTANCES", "CAPTURE INTERFERENCE"]);
}

#[test]
fn log_without_scenes_reports_no_scenes() {
    let view: LogView = [
        "21:00:00.000: Running as administrator: true",
        "21:00:02.000: ==== Recording Start ===============================================",
    ]
    .into_iter()
    .collect();

    let findings = AnalysisPipeline::default().analyze(&view);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].title, "NO SCENES/SOURCES");
}

#[test]
fn truncated_bitrate_block_is_skipped() {
    let mut lines = healthy_stream();
    lines.push("21:00:02.100: [x264 encoder: 'simple_h264_stream'] settings:".to_string());
    lines.push("21:00:02.101: \trate_control: CBR".to_string());

    let findings = AnalysisPipeline::default().analyze(&view_of(lines));
    assert!(findings.iter().all(|f| f.title != "LOW STREAM BANDWIDTH"));
}

#[test]
fn analyze_url_rejects_non_paste_links() {
    let fetcher = StaticFetcher {
        lines: Some(healthy_stream()),
    };

    let findings = AnalysisPipeline::default()
        .analyze_url("https://pastebin.com/abc", &fetcher)
        .unwrap();

    assert_eq!(findings, vec![no_log_finding()]);
    assert_eq!(findings[0].message, "URL contains no Github Gist link.");
}

#[test]
fn analyze_url_runs_catalog_on_fetched_log() {
    let mut lines = healthy_stream();
    lines.push("21:00:05.000: Auto-config wizard: completed".to_string());
    let fetcher = StaticFetcher { lines: Some(lines) };

    let findings = AnalysisPipeline::default().analyze_url(GIST, &fetcher).unwrap();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].title, "AUTOCONFIG WIZARD");
}

#[test]
fn analyze_url_propagates_fetch_errors() {
    let fetcher = StaticFetcher { lines: None };

    let err = AnalysisPipeline::default()
        .analyze_url(GIST, &fetcher)
        .unwrap_err();

    assert!(matches!(err, LogAnalyzerError::Fetch { .. }));
}

#[test]
fn survey_all_checks_every_scene() {
    let lines: Vec<String> = [
        SEP,
        "- scene 'A':",
        "    - source: 'G1' (game_capture)",
        "    - source: 'G2' (game_capture)",
        "- scene 'B':",
        "    - source: 'G3' (game_capture)",
        "    - source: 'G4' (game_capture)",
        SEP,
        "==== Recording Start ====",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    let view = view_of(lines);

    let first = AnalysisPipeline::default().analyze(&view);
    let all = AnalysisPipeline::default()
        .with_scene_survey(SceneSurvey::All)
        .analyze(&view);

    let count = |findings: &[Finding]| {
        findings
            .iter()
            .filter(|f| f.title == "MULTIPLE GAMECAPTURE")
            .count()
    };
    assert_eq!(count(&first), 1);
    assert_eq!(count(&all), 2);
}
