/// Immutable, 0-indexed sequence of log lines in original file order.
///
/// All lookups are plain substring containment. "No match" is an ordinary
/// outcome: every accessor that could come up empty returns an empty `Vec`
/// or `None`, never panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogView {
    lines: Vec<String>,
}

impl LogView {
    #[must_use]
    pub const fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split raw text on `'\n'`. A trailing `'\r'` on each line is dropped so
    /// logs saved with Windows line endings behave the same.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines containing `term`, in original order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.contains(term))
            .map(String::as_str)
            .collect()
    }

    /// Lines containing `term` restricted to indices in `[lower, higher)`.
    ///
    /// Bounds past the end of the log are clamped; an inverted range yields
    /// no matches.
    #[must_use]
    pub fn search_range(&self, term: &str, lower: usize, higher: usize) -> Vec<&str> {
        let higher = higher.min(self.lines.len());
        if lower >= higher {
            return Vec::new();
        }
        self.lines[lower..higher]
            .iter()
            .filter(|line| line.contains(term))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.lines.iter().any(|line| line.contains(term))
    }

    /// First line containing `term`.
    #[must_use]
    pub fn first(&self, term: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.contains(term))
            .map(String::as_str)
    }

    /// Indices of all lines containing `term`.
    #[must_use]
    pub fn positions(&self, term: &str) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(term))
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the last line containing `term`.
    #[must_use]
    pub fn last_position(&self, term: &str) -> Option<usize> {
        self.lines.iter().rposition(|line| line.contains(term))
    }
}

impl FromIterator<String> for LogView {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for LogView {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
