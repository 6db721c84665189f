//! Text matching utilities for AST assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Exact text match
    Exact(String),
    /// Text starts with prefix
    StartsWith(String),
    /// Text contains substring
    Contains(String),
    /// Text equals the expected value once surrounding whitespace is trimmed
    Trimmed(String),
}

impl TextMatch {
    /// Check if the actual text matches this pattern (returns bool)
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
            TextMatch::Trimmed(expected) => actual.trim() == expected,
        }
    }

    fn describe(&self) -> String {
        match self {
            TextMatch::Exact(expected) => format!("to be {:?}", expected),
            TextMatch::StartsWith(prefix) => format!("to start with {:?}", prefix),
            TextMatch::Contains(substring) => format!("to contain {:?}", substring),
            TextMatch::Trimmed(expected) => format!("to be {:?} once trimmed", expected),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected text {}, but got {:?}",
            context,
            self.describe(),
            actual
        );
    }
}
