use crate::logfile::{LogView, SceneRange};

use super::Finding;

const MONITOR_CAPTURE: &str = "monitor_capture";
const GAME_CAPTURE: &str = "game_capture";

/// Monitor capture and game capture in the same scene.
#[must_use]
pub fn capture_interference(view: &LogView, scene: SceneRange) -> Vec<Finding> {
    let monitors = view.search_range(MONITOR_CAPTURE, scene.start, scene.end);
    let games = view.search_range(GAME_CAPTURE, scene.start, scene.end);
    if monitors.is_empty() || games.is_empty() {
        return Vec::new();
    }
    vec![Finding::info(
        "CAPTURE INTERFERENCE",
        "Monitor and Game Capture Sources interfere with each other. Never put them in the same scene.",
    )]
}

/// More than one game capture source in the same scene.
#[must_use]
pub fn duplicate_game_capture(view: &LogView, scene: SceneRange) -> Vec<Finding> {
    if view.search_range(GAME_CAPTURE, scene.start, scene.end).len() <= 1 {
        return Vec::new();
    }
    vec![Finding::info(
        "MULTIPLE GAMECAPTURE",
        "Multiple Game Capture sources are usually not needed, and can sometimes interfere with each other. You can use the same Game Capture for all your games! If you change games often, try out the hotkey mode, which lets you press a key to select your active game. If you play games in fullscreen, use 'Capture any fullscreen application' mode.",
    )]
}

/// Emitted instead of any per-scene finding when the log declares no scenes.
#[must_use]
pub fn no_scenes() -> Finding {
    Finding::info(
        "NO SCENES/SOURCES",
        "There are neither scenes nor sources added to OBS. You won't be able to record anything but a black screen without adding sources to your scenes. If you're new to OBS Studio, the community has created some resources for you to use. Check out our Overview Guide at <a href=\"https://goo.gl/zyMvr1\">https://goo.gl/zyMvr1</a> and Nerd or Die's video guide at <a href=\"http://goo.gl/dGcPZ3\">http://goo.gl/dGcPZ3</a>",
    )
}

#[cfg(test)]
#[path = "scenes_tests.rs"]
mod tests;
