use serde::{Deserialize, Serialize};

/// Ordered include and exclude CSS selectors for a scan.
///
/// Selectors are appended only: they are never removed, deduplicated or checked
/// for CSS validity here. The browser reports bad selectors when the scan runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSet {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl SelectorSet {
    /// Create an empty SelectorSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Append selectors to the include list, preserving call order
    pub fn include<I, S>(&mut self, selectors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(selectors.into_iter().map(Into::into));
    }

    /// Append selectors to the exclude list, preserving call order
    pub fn exclude<I, S>(&mut self, selectors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(selectors.into_iter().map(Into::into));
    }

    /// Included selectors in insertion order
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Excluded selectors in insertion order
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Check if no selector has been configured at all
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let set = SelectorSet::new();
        assert!(set.includes().is_empty());
        assert!(set.excludes().is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_include_preserves_order_and_duplicates() {
        let mut set = SelectorSet::new();
        set.include(["#b", "#a"]);
        set.include(vec!["#b".to_string()]);

        assert_eq!(set.includes(), ["#b", "#a", "#b"]);
        assert!(set.excludes().is_empty());
    }

    #[test]
    fn test_exclude_appends() {
        let mut set = SelectorSet::new();
        set.exclude([".ad"]);
        set.exclude([".banner", ".ad"]);

        assert_eq!(set.excludes(), [".ad", ".banner", ".ad"]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut set = SelectorSet::new();
        set.include(Vec::<String>::new());
        set.exclude(std::iter::empty::<&str>());
        assert_eq!(set, SelectorSet::new());
    }
}
