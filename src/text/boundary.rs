//! Boundary classification for classical text corpora
//!
//! A character is a boundary when it is whitespace, when it sits inside a
//! parenthesized verse marker such as `(13)`, or when it is the conjunction
//! letter directly after whitespace.

/// The conjunction letter (Arabic waw)
pub const CONJUNCTION: char = 'و';

/// Opens a verse marker
pub const MARKER_OPEN: char = '(';

/// Closes a verse marker
pub const MARKER_CLOSE: char = ')';

/// Plain whitespace recognised by the tokenizer
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r')
}

/// Per-character boundary state machine.
///
/// Feed characters left to right through [`BoundaryClassifier::classify`];
/// the classifier remembers the previous character and whether a marker is
/// open. An unclosed marker swallows the rest of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryClassifier {
    last_seen: char,
    inside_marker: bool,
}

impl Default for BoundaryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryClassifier {
    pub fn new() -> Self {
        Self {
            last_seen: '.',
            inside_marker: false,
        }
    }

    /// Inspection accessor for tests and debugging: whether a marker is currently open
    #[allow(dead_code)]
    pub fn inside_marker(&self) -> bool {
        self.inside_marker
    }

    /// Classify the next character, returning true if it is a boundary
    pub fn classify(&mut self, c: char) -> bool {
        let boundary = self.decide(c);
        self.last_seen = c;
        boundary
    }

    fn decide(&mut self, c: char) -> bool {
        match c {
            MARKER_OPEN => {
                self.inside_marker = true;
                true
            }
            MARKER_CLOSE => {
                self.inside_marker = false;
                true
            }
            _ if self.inside_marker => true,
            _ => is_space(c) || (c == CONJUNCTION && is_space(self.last_seen)),
        }
    }
}
