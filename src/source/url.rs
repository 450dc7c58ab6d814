use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static GIST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b((?:https?:(?:/{1,3}gist\.github\.com)/)(anonymous/)?([a-z0-9]{32}))")
        .expect("Invalid regex")
});

/// A validated gist link and its 32-character identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteUrl {
    url: String,
    id: String,
}

impl PasteUrl {
    /// Extract the first gist link in `input`, if any.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let caps = GIST_URL.captures(input)?;
        Some(Self {
            url: caps.get(1)?.as_str().to_string(),
            id: caps.get(3)?.as_str().to_string(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for PasteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
