use super::*;
use crate::rules::Severity;

fn x264_block(bitrate: &str, fps_num: &str, fps_den: &str, width: &str, height: &str) -> String {
    format!(
        "12:00:00.000: [x264 encoder: 'simple_h264_stream'] settings:\n\
         12:00:00.000: \trate_control: CBR\n\
         12:00:00.000: \tbitrate:      {bitrate}\n\
         12:00:00.000: \tbuffer size:  {bitrate}\n\
         12:00:00.000: \tcrf:          0\n\
         12:00:00.000: \tfps_num:      {fps_num}\n\
         12:00:00.000: \tfps_den:      {fps_den}\n\
         12:00:00.000: \twidth:        {width}\n\
         12:00:00.000: \theight:       {height}\n\
         12:00:00.000: \tkeyint:       250"
    )
}

fn nvenc_block(bitrate: &str, keyint: &str, width: &str, height: &str) -> String {
    format!(
        "[NVENC encoder: 'streaming_h264'] settings:\n\
         \trate_control: CBR\n\
         \tbitrate:      {bitrate}\n\
         \tcqp:          20\n\
         \tkeyint:       {keyint}\n\
         \tpreset:       hq\n\
         \tprofile:      high\n\
         \tlevel:        auto\n\
         \twidth:        {width}\n\
         \theight:       {height}"
    )
}

#[test]
fn estimated_bitrate_formula() {
    // 1280 * 720 * 60 / 20000
    assert!((estimated_bitrate(1280.0, 720.0, 60.0) - 2764.8).abs() < 1e-9);
}

#[test]
fn x264_low_bitrate_reports_info() {
    let view = LogView::from_text(&x264_block("2500", "60", "1", "1280", "720"));

    let finding = x264_stream_bitrate(&view).unwrap();

    assert_eq!(finding.severity, Severity::Info);
    assert_eq!(finding.title, "LOW STREAM BANDWIDTH");
}

#[test]
fn x264_sufficient_bitrate_reports_nothing() {
    let view = LogView::from_text(&x264_block("6000", "60", "1", "1280", "720"));
    assert!(x264_stream_bitrate(&view).is_none());
}

#[test]
fn x264_fractional_frame_rate() {
    // 30000/1001 ~ 29.97 fps -> estimate ~ 1381.4
    let low = LogView::from_text(&x264_block("1300", "30000", "1001", "1280", "720"));
    let ok = LogView::from_text(&x264_block("1400", "30000", "1001", "1280", "720"));
    assert!(x264_stream_bitrate(&low).is_some());
    assert!(x264_stream_bitrate(&ok).is_none());
}

#[test]
fn x264_uses_last_settings_block() {
    let text = format!(
        "{}\n{}",
        x264_block("1000", "60", "1", "1920", "1080"),
        x264_block("9000", "60", "1", "1920", "1080")
    );
    let view = LogView::from_text(&text);
    assert!(x264_stream_bitrate(&view).is_none());
}

#[test]
fn x264_zero_denominator_reports_nothing() {
    let view = LogView::from_text(&x264_block("100", "60", "0", "1920", "1080"));
    assert!(x264_stream_bitrate(&view).is_none());
}

#[test]
fn truncated_block_reports_nothing() {
    let view = LogView::from_text(
        "[x264 encoder: 'simple_h264_stream'] settings:\n\
         \trate_control: CBR\n\
         \tbitrate:      100",
    );
    let settings = X264_STREAM.read(&view).unwrap();
    assert_eq!(settings.get(BITRATE), Some(100.0));
    assert_eq!(settings.get(WIDTH), None);
    assert!(x264_stream_bitrate(&view).is_none());
}

#[test]
fn non_numeric_field_reports_nothing() {
    let view = LogView::from_text(&x264_block("2500", "60", "1", "auto", "720"));
    assert!(x264_stream_bitrate(&view).is_none());
}

#[test]
fn missing_marker_reads_nothing() {
    let view = LogView::from_text("no encoder here");
    assert!(X264_STREAM.read(&view).is_none());
    assert!(nvenc_stream_bitrate(&view).is_none());
}

#[test]
fn nvenc_low_bitrate_reports_info() {
    // keyint 120 -> 60 fps; 1920 * 1080 * 60 / 20000 = 6220.8
    let view = LogView::from_text(&nvenc_block("6000", "120", "1920", "1080"));
    let finding = nvenc_stream_bitrate(&view).unwrap();
    assert_eq!(finding.title, "LOW STREAM BANDWIDTH");
}

#[test]
fn nvenc_sufficient_bitrate_reports_nothing() {
    let view = LogView::from_text(&nvenc_block("6500", "120", "1920", "1080"));
    assert!(nvenc_stream_bitrate(&view).is_none());
}

#[test]
fn nvenc_schema_reads_every_field() {
    let view = LogView::from_text(&nvenc_block("6000", "120", "1920", "1080"));
    let settings = NVENC_STREAM.read(&view).unwrap();
    assert_eq!(settings.len(), 4);
    assert_eq!(settings.get(KEYINT), Some(120.0));
    assert_eq!(settings.get(HEIGHT), Some(1080.0));
}
