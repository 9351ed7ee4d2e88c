//! Unified Result Model
//!
//! Every command maps its output to this model before rendering.

use serde::{Deserialize, Serialize};

use crate::highlight::palette::Rgb;
use crate::highlight::spans::HighlightSpan;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Token,
    Occurrence,
    Highlight,
    Error,
}

/// Character-based range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::core::error::QueryError> for ErrorInfo {
    fn from(err: &crate::core::error::QueryError) -> Self {
        ErrorInfo::new(err.code(), err.to_string())
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Token text or query token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// 1-based token position (tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Absolute positions of a query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<usize>>,

    /// Gap form of `positions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gaps: Option<Vec<usize>>,

    /// Highlighted range in character offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<CharRange>,

    /// Highlight background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorInfo>,
}

impl ResultItem {
    fn empty(kind: Kind) -> Self {
        Self {
            kind,
            text: None,
            position: None,
            positions: None,
            gaps: None,
            range: None,
            color: None,
            errors: Vec::new(),
        }
    }

    /// Create a token result
    pub fn token(position: usize, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            position: Some(position),
            ..Self::empty(Kind::Token)
        }
    }

    /// Create an occurrence result for one query
    pub fn occurrence(query: impl Into<String>, positions: Vec<usize>, gaps: Vec<usize>) -> Self {
        Self {
            text: Some(query.into()),
            positions: Some(positions),
            gaps: Some(gaps),
            ..Self::empty(Kind::Occurrence)
        }
    }

    /// Create a highlight result
    pub fn highlight(span: &HighlightSpan) -> Self {
        Self {
            text: Some(span.query.clone()),
            range: Some(CharRange {
                start: span.start,
                end: span.end,
            }),
            color: Some(span.color),
            ..Self::empty(Kind::Highlight)
        }
    }

    /// Create an error result
    pub fn error(error: ErrorInfo) -> Self {
        Self {
            errors: vec![error],
            ..Self::empty(Kind::Error)
        }
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
