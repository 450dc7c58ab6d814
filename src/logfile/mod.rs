//! Line-indexed representation of one fetched log and its structural markers.

mod structure;
mod view;

pub use structure::{SCENE_MARKER, SECTION_SEPARATOR, SceneRange, StructureIndex, next_boundary};
pub use view::LogView;
