//! Gap transform
//!
//! The gap form keeps the first absolute position and replaces every later
//! position with the number of tokens strictly between it and the previous
//! occurrence.

use std::collections::HashMap;

use super::positions::PositionIndex;

/// Gap form of a [`PositionIndex`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapIndex {
    entries: HashMap<String, Vec<usize>>,
}

impl GapIndex {
    pub(crate) fn from_entries(entries: HashMap<String, Vec<usize>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, query: &str) -> Option<&[usize]> {
        self.entries.get(query).map(Vec::as_slice)
    }

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

/// Convert one strictly increasing position list into gaps
pub fn positions_to_gaps(positions: &[usize]) -> Vec<usize> {
    let mut gaps = Vec::with_capacity(positions.len());
    let mut previous: Option<usize> = None;
    for &p in positions {
        gaps.push(match previous {
            None => p,
            Some(prev) => p - prev - 1,
        });
        previous = Some(p);
    }
    gaps
}

/// Recover absolute positions from a gap list (cumulative sum)
pub fn gaps_to_positions(gaps: &[usize]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(gaps.len());
    let mut previous: Option<usize> = None;
    for &g in gaps {
        let p = match previous {
            None => g,
            Some(prev) => prev + g + 1,
        };
        positions.push(p);
        previous = Some(p);
    }
    positions
}

/// Apply the gap transform to every entry
pub fn to_gaps(index: &PositionIndex) -> GapIndex {
    let entries = index
        .sorted_entries()
        .into_iter()
        .map(|(k, positions)| (k.to_string(), positions_to_gaps(positions)))
        .collect();
    GapIndex::from_entries(entries)
}

/// Inverse of [`to_gaps`]
pub fn from_gaps(index: &GapIndex) -> PositionIndex {
    let entries = index
        .sorted_entries()
        .into_iter()
        .map(|(k, gaps)| (k.to_string(), gaps_to_positions(gaps)))
        .collect();
    PositionIndex::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::positions::build_position_index;
    use crate::text::tokenize::tokenize;

    #[test]
    fn test_positions_to_gaps() {
        assert_eq!(positions_to_gaps(&[3, 4, 10]), vec![3, 0, 5]);
        assert_eq!(positions_to_gaps(&[7]), vec![7]);
        assert!(positions_to_gaps(&[]).is_empty());
    }

    #[test]
    fn test_gaps_to_positions() {
        assert_eq!(gaps_to_positions(&[3, 0, 5]), vec![3, 4, 10]);
    }

    #[test]
    fn test_to_gaps_keeps_lengths() {
        let index = build_position_index(&["a", "b", "a", "a", "b"], &["a", "b"]);
        let gaps = to_gaps(&index);
        assert_eq!(gaps.get("a"), Some(&[1, 1, 0][..]));
        assert_eq!(gaps.get("b"), Some(&[2, 2][..]));
        assert_eq!(gaps.len(), index.len());
    }

    #[test]
    fn test_single_occurrence_unchanged() {
        let tokens = tokenize("الر (1) كتاب أنزلناه");
        let gaps = to_gaps(&build_position_index(&tokens, &["كتاب"]));
        assert_eq!(gaps.get("كتاب"), Some(&[2][..]));
    }

    #[test]
    fn test_gaps_with_separated_occurrences() {
        let index = build_position_index(&["قال", "وقال", "قال"], &["قال"]);
        assert_eq!(to_gaps(&index).get("قال"), Some(&[1, 1][..]));
    }

    #[test]
    fn test_round_trip_recovers_positions() {
        let tokens: Vec<String> = "a b c a a d b a c c".split(' ').map(String::from).collect();
        let index = build_position_index(&tokens, &["a", "b", "c", "d"]);
        assert_eq!(from_gaps(&to_gaps(&index)), index);
    }

    #[test]
    fn test_empty_index() {
        let gaps = to_gaps(&PositionIndex::default());
        assert!(gaps.is_empty());
        assert!(from_gaps(&gaps).is_empty());
    }
}
