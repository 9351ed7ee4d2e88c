//! Position index - Where each query token occurs in a token sequence

use std::collections::{HashMap, HashSet};

/// Absolute 1-based positions of each query token.
///
/// Every list is non-empty and strictly increasing. Queries that never occur
/// have no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    entries: HashMap<String, Vec<usize>>,
}

impl PositionIndex {
    pub(crate) fn from_entries(entries: HashMap<String, Vec<usize>>) -> Self {
        Self { entries }
    }

    /// Positions for one query, if it occurred
    #[allow(dead_code)]
    pub fn get(&self, query: &str) -> Option<&[usize]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    /// Number of distinct queries found
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by key, for deterministic output
    pub fn sorted_entries(&self) -> Vec<(&str, &[usize])> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Build the position index for `queries` over `tokens`.
///
/// Positions start at 1. Duplicate queries share one entry.
pub fn build_position_index<T, Q>(tokens: &[T], queries: &[Q]) -> PositionIndex
where
    T: AsRef<str>,
    Q: AsRef<str>,
{
    let wanted: HashSet<&str> = queries.iter().map(|q| q.as_ref()).collect();
    let mut entries: HashMap<String, Vec<usize>> = HashMap::new();

    if wanted.is_empty() {
        return PositionIndex::from_entries(entries);
    }

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if wanted.contains(token) {
            entries.entry(token.to_string()).or_default().push(i + 1);
        }
    }

    PositionIndex::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize::tokenize;

    #[test]
    fn test_build_basic() {
        let tokens = ["a", "b", "a", "c", "a"];
        let index = build_position_index(&tokens, &["a", "c"]);
        assert_eq!(index.get("a"), Some(&[1, 3, 5][..]));
        assert_eq!(index.get("c"), Some(&[4][..]));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_missing_query_is_absent() {
        let index = build_position_index(&["a", "b"], &["z"]);
        assert!(index.get("z").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_query_set() {
        let queries: [&str; 0] = [];
        let index = build_position_index(&["a", "b"], &queries);
        assert!(index.is_empty());
    }

    #[test]
    fn test_duplicate_queries_collapse() {
        let index = build_position_index(&["a", "x", "a"], &["a", "a"]);
        assert_eq!(index.get("a"), Some(&[1, 3][..]));
    }

    #[test]
    fn test_exact_match_only() {
        let index = build_position_index(&["قال", "وقال", "قال"], &["قال"]);
        assert_eq!(index.get("قال"), Some(&[1, 3][..]));
    }

    #[test]
    fn test_marker_is_not_counted() {
        let tokens = tokenize("الر (1) كتاب أنزلناه");
        let index = build_position_index(&tokens, &["كتاب"]);
        assert_eq!(index.get("كتاب"), Some(&[2][..]));
    }

    #[test]
    fn test_positions_in_range_and_increasing() {
        let tokens: Vec<String> = "x y x x z y x".split(' ').map(String::from).collect();
        let index = build_position_index(&tokens, &["x", "y", "z"]);
        for (_, positions) in index.sorted_entries() {
            assert!(positions.iter().all(|&p| p >= 1 && p <= tokens.len()));
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_sorted_entries_order() {
        let index = build_position_index(&["c", "a", "b"], &["c", "b", "a"]);
        let keys: Vec<_> = index.sorted_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
