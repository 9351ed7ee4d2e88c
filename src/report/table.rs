//! Elastic tab-stop tables
//!
//! Every cell is treated as terminated by a tab stop. A column's width is the
//! widest cell (in characters) across the contiguous block of rows that have
//! that column, plus [`PADDING`].

use crate::index::gaps::GapIndex;

/// Spaces added after the widest cell of a column
pub const PADDING: usize = 2;

/// Width of every cell, per row
fn column_widths(rows: &[Vec<String>]) -> Vec<Vec<usize>> {
    let mut widths: Vec<Vec<usize>> = rows.iter().map(|r| vec![0; r.len()]).collect();
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);

    for col in 0..max_cols {
        let mut line = 0;
        while line < rows.len() {
            if rows[line].len() <= col {
                line += 1;
                continue;
            }

            let block_start = line;
            let mut width = 0;
            while line < rows.len() && rows[line].len() > col {
                width = width.max(rows[line][col].chars().count() + PADDING);
                line += 1;
            }

            for row_widths in &mut widths[block_start..line] {
                row_widths[col] = width;
            }
        }
    }

    widths
}

/// Align rows of cells into a text table, one line per row
pub fn align_rows(rows: &[Vec<String>]) -> String {
    let widths = column_widths(rows);
    let mut output = String::new();

    for (row, row_widths) in rows.iter().zip(widths) {
        for (cell, width) in row.iter().zip(row_widths) {
            output.push_str(cell);
            let fill = width.saturating_sub(cell.chars().count());
            output.extend(std::iter::repeat(' ').take(fill));
        }
        output.push('\n');
    }

    output
}

/// Format the gap index: one row per query, sorted by query
pub fn format_gap_table(index: &GapIndex) -> String {
    let rows: Vec<Vec<String>> = index
        .sorted_entries()
        .into_iter()
        .map(|(query, gaps)| {
            std::iter::once(query.to_string())
                .chain(gaps.iter().map(|g| g.to_string()))
                .collect()
        })
        .collect();

    align_rows(&rows)
}
