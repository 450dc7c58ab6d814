//! Stream bitrate estimation from the encoder settings block.
//!
//! OBS prints each encoder's settings as a marker line followed by one
//! `key: value` line per setting. The layout differs per encoder backend, so
//! each backend is described by an [`EncoderSchema`]: the marker plus the
//! line offset and parser of every field the estimate needs.

use crate::logfile::LogView;

use super::Finding;

/// Divisor turning `width * height * fps` into an expected kbps.
pub const BITS_PER_PIXEL_DIVISOR: f64 = 20_000.0;

pub const BITRATE: &str = "bitrate";
pub const FPS_NUM: &str = "fps_num";
pub const FPS_DEN: &str = "fps_den";
pub const KEYINT: &str = "keyint";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";

/// One setting read from a fixed offset after the marker line.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub parse: fn(&str) -> Option<f64>,
}

impl FieldSpec {
    const fn last_token(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            parse: parse_last_token,
        }
    }
}

/// Field layout of one encoder backend's settings block.
#[derive(Debug, Clone, Copy)]
pub struct EncoderSchema {
    pub encoder: &'static str,
    pub marker: &'static str,
    pub fields: &'static [FieldSpec],
    pub effective_fps: fn(&EncoderSettings) -> Option<f64>,
}

pub const X264_STREAM: EncoderSchema = EncoderSchema {
    encoder: "x264",
    marker: "[x264 encoder: 'simple_h264_stream'] settings:",
    fields: &[
        FieldSpec::last_token(BITRATE, 2),
        FieldSpec::last_token(FPS_NUM, 5),
        FieldSpec::last_token(FPS_DEN, 6),
        FieldSpec::last_token(WIDTH, 7),
        FieldSpec::last_token(HEIGHT, 8),
    ],
    effective_fps: fraction_fps,
};

pub const NVENC_STREAM: EncoderSchema = EncoderSchema {
    encoder: "NVENC",
    marker: "[NVENC encoder: 'streaming_h264'] settings:",
    fields: &[
        FieldSpec::last_token(BITRATE, 2),
        FieldSpec::last_token(KEYINT, 4),
        FieldSpec::last_token(WIDTH, 8),
        FieldSpec::last_token(HEIGHT, 9),
    ],
    effective_fps: keyint_fps,
};

/// Values successfully read from one settings block. Fields whose line was
/// missing or malformed are simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncoderSettings {
    values: Vec<(&'static str, f64)>,
}

impl EncoderSettings {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|&(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl EncoderSchema {
    /// Read the fields after the last marker line, or `None` without a marker.
    #[must_use]
    pub fn read(&self, view: &LogView) -> Option<EncoderSettings> {
        let marker = view.last_position(self.marker)?;
        let values = self
            .fields
            .iter()
            .filter_map(|field| {
                let line = view.line(marker.checked_add(field.offset)?)?;
                (field.parse)(line).map(|value| (field.name, value))
            })
            .collect();
        Some(EncoderSettings { values })
    }

    /// Expected bitrate for the configured resolution and frame rate.
    #[must_use]
    pub fn estimate(&self, settings: &EncoderSettings) -> Option<f64> {
        let width = settings.get(WIDTH)?;
        let height = settings.get(HEIGHT)?;
        let fps = (self.effective_fps)(settings)?;
        Some(estimated_bitrate(width, height, fps))
    }

    /// Info finding when the configured bitrate is below the estimate.
    #[must_use]
    pub fn evaluate(&self, view: &LogView) -> Option<Finding> {
        let settings = self.read(view)?;
        let bitrate = settings.get(BITRATE)?;
        let estimate = self.estimate(&settings)?;
        tracing::debug!(
            encoder = self.encoder,
            bitrate,
            estimate,
            "Stream bitrate estimate"
        );
        (bitrate < estimate).then(low_bandwidth)
    }
}

#[must_use]
pub fn estimated_bitrate(width: f64, height: f64, fps: f64) -> f64 {
    width * height * fps / BITS_PER_PIXEL_DIVISOR
}

fn parse_last_token(line: &str) -> Option<f64> {
    line.split_whitespace().last()?.parse().ok()
}

fn fraction_fps(settings: &EncoderSettings) -> Option<f64> {
    let num = settings.get(FPS_NUM)?;
    let den = settings.get(FPS_DEN)?;
    (den != 0.0).then(|| num / den)
}

// Auto keyframe interval is two seconds' worth of frames.
fn keyint_fps(settings: &EncoderSettings) -> Option<f64> {
    settings.get(KEYINT).map(|keyint| keyint / 2.0)
}

fn low_bandwidth() -> Finding {
    Finding::info(
        "LOW STREAM BANDWIDTH",
        "Your stream encoder is set to a too low video bitrate. This will lower picture quality especially in high motion scenes like fast paced games. Use the autoconfig wizard to adjust your settings to the optimum for your situation. It can be accessed from the Tools menu in OBS, and then just follow the on-screen directions.",
    )
}

#[must_use]
pub fn x264_stream_bitrate(view: &LogView) -> Option<Finding> {
    X264_STREAM.evaluate(view)
}

#[must_use]
pub fn nvenc_stream_bitrate(view: &LogView) -> Option<Finding> {
    NVENC_STREAM.evaluate(view)
}

#[cfg(test)]
#[path = "bitrate_tests.rs"]
mod tests;
