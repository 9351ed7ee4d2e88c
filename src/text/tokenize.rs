//! Tokenizer - Splits raw text into tokens using [`BoundaryClassifier`]

use super::boundary::BoundaryClassifier;

/// Split `text` wherever `is_boundary` returns true.
///
/// The predicate is called exactly once per character, in order. Boundary
/// runs are discarded and no empty token is ever produced.
pub fn split_with<F>(text: &str, mut is_boundary: F) -> Vec<String>
where
    F: FnMut(char) -> bool,
{
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, c) in text.char_indices() {
        if is_boundary(c) {
            if let Some(s) = start.take() {
                tokens.push(text[s..offset].to_string());
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }

    if let Some(s) = start {
        tokens.push(text[s..].to_string());
    }

    tokens
}

/// Tokenize a document with the corpus boundary rules
pub fn tokenize(text: &str) -> Vec<String> {
    let mut classifier = BoundaryClassifier::new();
    split_with(text, |c| classifier.classify(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::boundary::is_space;

    #[test]
    fn test_split_with_plain_spaces() {
        assert_eq!(split_with("  a  bb c ", is_space), vec!["a", "bb", "c"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\r ").is_empty());
    }

    #[test]
    fn test_tokenize_skips_verse_marker() {
        assert_eq!(
            tokenize("الر (1) كتاب أنزلناه"),
            vec!["الر", "كتاب", "أنزلناه"]
        );
    }

    #[test]
    fn test_marker_glued_to_word_splits_it() {
        assert_eq!(tokenize("كتاب(2)أنزلناه"), vec!["كتاب", "أنزلناه"]);
    }

    #[test]
    fn test_conjunction_after_space_is_dropped() {
        assert_eq!(tokenize("قال وقال قال"), vec!["قال", "قال", "قال"]);
    }

    #[test]
    fn test_standalone_conjunction_vanishes() {
        assert_eq!(tokenize("الله و رسوله"), vec!["الله", "رسوله"]);
    }

    #[test]
    fn test_conjunction_inside_word_kept() {
        assert_eq!(tokenize("يوم القيامة"), vec!["يوم", "القيامة"]);
    }

    #[test]
    fn test_conjunction_at_document_start_kept() {
        assert_eq!(tokenize("وقال"), vec!["وقال"]);
    }

    #[test]
    fn test_unclosed_marker_discards_remainder() {
        assert_eq!(tokenize("a b (3 c d"), vec!["a", "b"]);
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(tokenize("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_no_token_contains_boundary_char() {
        let text = "بسم (1) الله\r\nالرحمن و الرحيم (2)\nوالعصر";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(!token.chars().any(|c| is_space(c) || c == '(' || c == ')'));
        }
    }
}
