//! Rules that fire on the presence of fixed substrings.

use crate::logfile::LogView;

use super::Finding;

const CLEAN_LOG_HINT: &str = "Please post a link to a clean log file. To make a clean log file, first restart OBS, then start your stream/recording for ~30 seconds and stop it again. Make sure you replicate any issues as best you can, which means having any games/apps open and captured, etc. When you're done select Help > Log Files > Upload Current Log File. Copy the URL and paste it here.";

const REMUX_HINT: &str = "If you require MP4 files for some other purpose like editing, remux them afterwards by selecting File > Remux Recordings in the main OBS Studio window.";

const WRITING_FILE: &str = "Writing file ";

const FAST_PRESETS: [&str; 3] = ["veryfast", "superfast", "ultrafast"];

#[must_use]
pub fn dual_instance(view: &LogView) -> Option<Finding> {
    view.contains("Warning: OBS is already running!").then(|| {
        Finding::critical(
            "TWO INSTANCES",
            "Two instances of OBS are running. They will likely interfere with each other and consume excessive resources. Stop one of them. Check task manager for stray OBS processes if you can't find the other one.",
        )
    })
}

#[must_use]
pub fn autoconfig_wizard(view: &LogView) -> Option<Finding> {
    view.contains("Auto-config wizard").then(|| {
        Finding::critical(
            "AUTOCONFIG WIZARD",
            format!(
                "The log contains an Auto-config wizard run. Results of this analysis are therefore inaccurate. {CLEAN_LOG_HINT}"
            ),
        )
    })
}

#[must_use]
pub fn init_failure(view: &LogView) -> Option<Finding> {
    view.contains("Failed to initialize video").then(|| {
        Finding::critical(
            "INITIALIZE FAILED",
            "Failed to initialize video. Your GPU may not be supported, or your graphics drivers may need to be updated.",
        )
    })
}

#[must_use]
pub fn killer_nic(view: &LogView) -> Option<Finding> {
    view.contains("Interface: Killer").then(|| {
        Finding::info(
            "KILLER NIC",
            "Killer's Firewall is known for its poor performance and issues when trying to stream. Please download the driver pack from <a href=\"http://www.killernetworking.com/driver-downloads/category/other-downloads\">the vendor's page</a>, completely uninstall all Killer NIC items and install their Driver only package.",
        )
    })
}

#[must_use]
pub fn wireless_adapter(view: &LogView) -> Option<Finding> {
    view.contains("802.11").then(|| {
        Finding::warning(
            "WIFI STREAMING",
            "In many cases, wireless connections can cause issues because of their unstable nature. Streaming really requires a stable connection. Often wireless connections are fine, but if you have problems, then we are going to be very unlikely to be able to help you diagnose it if you're on a wireless just because it adds yet another variable. We recommend streaming on wired connections.",
        )
    })
}

/// Fires when the first administrator line ends in `false`.
#[must_use]
pub fn admin_privileges(view: &LogView) -> Option<Finding> {
    let line = view.first("Running as administrator")?;
    (line.split_whitespace().last() == Some("false")).then(|| {
        Finding::info(
            "NOT ADMIN",
            "OBS is not running as administrator. This can lead to OBS not being able to game capture certain games.",
        )
    })
}

#[must_use]
pub fn empty_session(view: &LogView) -> Option<Finding> {
    let has_session =
        view.contains("== Recording Start ==") || view.contains("== Streaming Start ==");
    (!has_session).then(|| {
        Finding::info(
            "EMPTY LOG",
            format!(
                "Your log contains no recording or streaming session. Results of this log analysis are limited. {CLEAN_LOG_HINT}"
            ),
        )
    })
}

fn writes_container(view: &LogView, extension: &str) -> bool {
    view.search(WRITING_FILE)
        .iter()
        .any(|line| line.contains(extension))
}

#[must_use]
pub fn mp4_container(view: &LogView) -> Option<Finding> {
    writes_container(view, ".mp4").then(|| {
        Finding::critical(
            "MP4 RECORDING",
            format!(
                "If you record to MP4 and the recording is interrupted, the file will be corrupted and unrecoverable. {REMUX_HINT}"
            ),
        )
    })
}

#[must_use]
pub fn mov_container(view: &LogView) -> Option<Finding> {
    writes_container(view, ".mov").then(|| {
        Finding::critical(
            "MOV RECORDING",
            format!(
                "If you record to MOV and the recording is interrupted, the file will be corrupted and unrecoverable. {REMUX_HINT}"
            ),
        )
    })
}

#[must_use]
pub fn shared_memory_capture(view: &LogView) -> Option<Finding> {
    view.contains("user is forcing shared memory").then(|| {
        Finding::info(
            "MEMORY CAPTURE",
            "Shared memory capture is very slow and should only be used on SLI & Crossfire systems. Don't enable it anywhere else.",
        )
    })
}

/// Fires when x264 is in use and any logged preset is slower than `veryfast`.
#[must_use]
pub fn slow_preset(view: &LogView) -> Option<Finding> {
    if !view.contains("x264 encoder:") {
        return None;
    }
    let slow = view
        .search("preset: ")
        .iter()
        .any(|line| !FAST_PRESETS.iter().any(|preset| line.contains(preset)));
    slow.then(|| {
        Finding::warning(
            "WRONG PRESET",
            "A slower x264 preset than 'veryfast' is in use. It is recommended to leave this value on veryfast, as there are significant diminishing returns to setting it lower.",
        )
    })
}

#[cfg(test)]
#[path = "existence_tests.rs"]
mod tests;
