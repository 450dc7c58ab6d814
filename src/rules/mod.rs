pub mod bitrate;
mod catalog;
pub mod existence;
mod finding;
mod gate;
pub mod hardware;
pub mod percentage;
pub mod scenes;

pub use catalog::{LogCheck, Rule, RuleCatalog, SceneCheck, SceneSurvey};
pub use finding::{Finding, Severity};
pub use gate::{GateDecision, legacy_version};
