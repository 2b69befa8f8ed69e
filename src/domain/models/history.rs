use serde::{Deserialize, Serialize};

/// Maximum number of keywords kept in the recent-search list.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Ordered recent-search keywords, most recent first, capped at
/// [`MAX_RECENT_SEARCHES`] distinct entries.
///
/// Recording a keyword that is already present (case-sensitive exact match)
/// is a no-op: the existing entry keeps its position instead of being
/// promoted to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    terms: Vec<String>,
}

impl SearchHistory {
    /// Record a searched keyword. Returns `true` if the history changed.
    pub fn record(&mut self, keyword: &str) -> bool {
        if self.terms.iter().any(|t| t == keyword) {
            return false;
        }
        self.terms.insert(0, keyword.to_string());
        self.terms.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends_most_recent_first() {
        let mut history = SearchHistory::default();
        assert!(history.record("AI"));
        assert!(history.record("Marketing"));

        assert_eq!(history.terms(), &["Marketing", "AI"]);
    }

    #[test]
    fn test_record_duplicate_is_noop_and_does_not_promote() {
        let mut history = SearchHistory::default();
        history.record("AI");
        history.record("Marketing");

        assert!(!history.record("AI"));
        // "AI" stays in place, it is not moved to the front
        assert_eq!(history.terms(), &["Marketing", "AI"]);
    }

    #[test]
    fn test_record_is_case_sensitive() {
        let mut history = SearchHistory::default();
        history.record("AI");

        assert!(history.record("ai"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_record_evicts_oldest_beyond_cap() {
        let mut history = SearchHistory::default();
        for term in ["a", "b", "c", "d", "e", "f"] {
            history.record(term);
        }

        assert_eq!(history.len(), MAX_RECENT_SEARCHES);
        assert_eq!(history.terms(), &["f", "e", "d", "c", "b"]);
    }
}
