use super::LogView;

/// Fixed-width rule OBS prints between log sections.
pub const SECTION_SEPARATOR: &str = "------------------------------------------------";

/// Substring that opens a scene declaration in the loaded-scenes dump.
pub const SCENE_MARKER: &str = "- scene";

/// Half-open interval `[start, end)` of line indices belonging to one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRange {
    pub start: usize,
    pub end: usize,
}

impl SceneRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Positions of section separators and scene declarations in one log.
///
/// Built fresh for every analysis; nothing here is cached across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureIndex {
    sections: Vec<usize>,
    scenes: Vec<usize>,
    line_count: usize,
}

impl StructureIndex {
    #[must_use]
    pub fn build(view: &LogView) -> Self {
        Self {
            sections: view.positions(SECTION_SEPARATOR),
            scenes: view.positions(SCENE_MARKER),
            line_count: view.len(),
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[usize] {
        &self.sections
    }

    #[must_use]
    pub fn scenes(&self) -> &[usize] {
        &self.scenes
    }

    #[must_use]
    pub const fn has_scenes(&self) -> bool {
        !self.scenes.is_empty()
    }

    /// One range per scene declaration, in log order.
    ///
    /// A scene runs until the next scene declaration. The last scene runs
    /// until the next section separator, or to the end of the log when no
    /// separator follows it.
    #[must_use]
    pub fn scene_ranges(&self) -> Vec<SceneRange> {
        self.scenes
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = match self.scenes.get(i + 1) {
                    Some(&next_scene) => next_scene,
                    None => next_boundary(start, &self.sections).unwrap_or(self.line_count),
                };
                SceneRange::new(start, end)
            })
            .collect()
    }
}

/// First candidate strictly greater than `after`.
#[must_use]
pub fn next_boundary(after: usize, candidates: &[usize]) -> Option<usize> {
    candidates.iter().copied().find(|&candidate| candidate > after)
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
