//! Report persistence
//!
//! A report is the gap table written by [`format_gap_table`]. Loading accepts
//! any whitespace between fields, so hand-edited reports still parse.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::table::format_gap_table;
use crate::core::error::QueryError;
use crate::index::gaps::GapIndex;

/// A report line: a query token followed by one or more gaps
pub static REPORT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)((?:[ \t]+\d+)+)$").expect("Invalid REPORT_LINE_RE regex")
});

/// Write the gap table for `index` to `path`
pub fn write_report(path: &Path, index: &GapIndex) -> Result<(), QueryError> {
    fs::write(path, format_gap_table(index)).map_err(|source| QueryError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse report text back into a gap index
pub fn parse_report(content: &str) -> Result<GapIndex, QueryError> {
    let mut entries: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let caps = REPORT_LINE_RE
            .captures(line)
            .ok_or_else(|| QueryError::MalformedReport {
                line: line_no,
                message: format!("expected a token followed by gaps, got '{}'", line),
            })?;

        let query = caps[1].to_string();
        let gaps = caps[2]
            .split_whitespace()
            .map(|g| {
                g.parse::<usize>().map_err(|e| QueryError::MalformedReport {
                    line: line_no,
                    message: format!("invalid gap '{}': {}", g, e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        check_positions(&gaps, line_no)?;

        if entries.contains_key(&query) {
            return Err(QueryError::MalformedReport {
                line: line_no,
                message: format!("duplicate token '{}'", query),
            });
        }
        entries.insert(query, gaps);
    }

    Ok(GapIndex::from_entries(entries))
}

/// Gaps must rebuild to positions that start at 1 and fit in `usize`
fn check_positions(gaps: &[usize], line_no: usize) -> Result<(), QueryError> {
    let malformed = |message: String| QueryError::MalformedReport {
        line: line_no,
        message,
    };

    let mut position = match gaps.first() {
        Some(&0) => return Err(malformed("first position must be at least 1".to_string())),
        Some(&first) => first,
        None => return Ok(()),
    };

    for &gap in &gaps[1..] {
        position = position
            .checked_add(gap)
            .and_then(|p| p.checked_add(1))
            .ok_or_else(|| malformed(format!("gap {} overflows the token position", gap)))?;
    }

    Ok(())
}

/// Load a report previously written by [`write_report`]
pub fn load_report(path: &Path) -> Result<GapIndex, QueryError> {
    let content = fs::read_to_string(path).map_err(|source| QueryError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_report(&content)
}
