//! Span matching
//!
//! Each query is matched literally, followed by one space or newline. This
//! works on the raw text and does not consult the tokenizer, so a highlighted
//! word is not guaranteed to be a counted token (and vice versa).

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::palette::{color_for, Rgb};
use crate::core::error::QueryError;

/// A colored range `[start, end)` in character offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub query: String,
    pub start: usize,
    pub end: usize,
    pub color: Rgb,
}

/// Build the literal `query + [ \n]` pattern
pub fn literal_pattern(query: &str) -> Result<Regex, QueryError> {
    let pattern = format!("{}[ \n]", regex::escape(query));
    Regex::new(&pattern).map_err(|source| QueryError::Pattern {
        query: query.to_string(),
        source,
    })
}

/// Compute highlight spans for `queries` over `text`.
///
/// Spans are grouped by query in the given order, each group in match
/// order. Duplicate queries produce their own group with their own color.
pub fn compute_highlights<Q: AsRef<str>>(
    text: &str,
    queries: &[Q],
) -> Result<Vec<HighlightSpan>, QueryError> {
    let mut spans = Vec::new();

    for (i, query) in queries.iter().enumerate() {
        let query = query.as_ref();
        let re = literal_pattern(query)?;
        let color = color_for(i);
        let query_chars = query.chars().count();

        // Matches come in ascending byte order, so count characters incrementally
        let mut byte_cursor = 0usize;
        let mut char_cursor = 0usize;

        for m in re.find_iter(text) {
            char_cursor += text[byte_cursor..m.start()].chars().count();
            byte_cursor = m.start();

            spans.push(HighlightSpan {
                query: query.to_string(),
                start: char_cursor,
                end: char_cursor + query_chars,
                color,
            });
        }
    }

    Ok(spans)
}

/// Text as the display sees it: carriage returns are not characters there
pub fn display_text(text: &str) -> String {
    text.replace('\r', "")
}
