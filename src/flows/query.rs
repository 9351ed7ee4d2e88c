//! Query flow - Tokenize, index, highlight and report a document

use anyhow::{Context, Result};
use std::path::Path;

use super::Console;
use crate::core::error::QueryError;
use crate::core::file_reader::{read_document, Document};
use crate::core::model::{ErrorInfo, ResultItem, ResultSet};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::highlight::ansi::render_ansi;
use crate::highlight::spans::{compute_highlights, display_text, HighlightSpan};
use crate::index::gaps::{from_gaps, to_gaps, GapIndex};
use crate::index::positions::{build_position_index, PositionIndex};
use crate::report::store::{load_report, write_report};
use crate::report::table::format_gap_table;
use crate::text::tokenize::tokenize;

/// Everything computed for one document and query list
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub tokens: Vec<String>,
    pub positions: PositionIndex,
    pub gaps: GapIndex,
}

/// Run the indexing stages over already loaded text
pub fn analyze(text: &str, queries: &[String]) -> QueryOutcome {
    let tokens = tokenize(text);
    let positions = build_position_index(&tokens, queries);
    let gaps = to_gaps(&positions);
    QueryOutcome {
        tokens,
        positions,
        gaps,
    }
}

/// One occurrence item per found query, sorted by query
pub fn occurrence_items(positions: &PositionIndex, gaps: &GapIndex) -> ResultSet {
    positions
        .sorted_entries()
        .into_iter()
        .map(|(query, absolute)| {
            let gap_list = gaps.get(query).map(<[usize]>::to_vec).unwrap_or_default();
            ResultItem::occurrence(query, absolute.to_vec(), gap_list)
        })
        .collect()
}

fn load(path: &Path, console: Console) -> Result<Document> {
    let document = read_document(path).context("Failed to read input document")?;
    console.note(format_args!(
        "read {} ({} bytes, xxh3 {}{})",
        path.display(),
        document.meta.size,
        document.meta.hash,
        if document.meta.lossy { ", lossy utf-8" } else { "" }
    ));
    Ok(document)
}

fn print(result_set: &ResultSet, config: RenderConfig) {
    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(result_set));
}

/// Run the tokens command
pub fn run_tokens(path: &Path, config: RenderConfig, console: Console) -> Result<()> {
    let document = load(path, console)?;
    let tokens = tokenize(&document.text);
    console.note(format_args!("{} tokens", tokens.len()));

    let result_set: ResultSet = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| ResultItem::token(i + 1, token))
        .collect();

    print(&result_set, config);
    Ok(())
}

/// Run the index command
pub fn run_index(
    path: &Path,
    queries: &[String],
    config: RenderConfig,
    console: Console,
) -> Result<()> {
    let document = load(path, console)?;
    let outcome = analyze(&document.text, queries);
    console.note(format_args!(
        "{} tokens, {} of {} queries found",
        outcome.tokens.len(),
        outcome.positions.len(),
        queries.len()
    ));

    print(&occurrence_items(&outcome.positions, &outcome.gaps), config);
    Ok(())
}

/// Run the highlight command
pub fn run_highlight(
    path: &Path,
    queries: &[String],
    show: bool,
    config: RenderConfig,
    console: Console,
) -> Result<()> {
    let document = load(path, console)?;
    let text = display_text(&document.text);
    let spans = compute_highlights(&text, queries)?;
    console.note(format_args!("{} highlight spans", spans.len()));

    if show {
        println!("{}", render_ansi(&text, &spans, console.color));
        return Ok(());
    }

    let result_set: ResultSet = spans.iter().map(ResultItem::highlight).collect();
    print(&result_set, config);
    Ok(())
}

/// Highlighted document followed by the gap table
pub fn compose_view(text: &str, spans: &[HighlightSpan], gaps: &GapIndex, color: bool) -> String {
    let mut view = render_ansi(text, spans, color);
    if !view.ends_with('\n') {
        view.push('\n');
    }
    view.push_str(&format_gap_table(gaps));
    view
}

/// Run the end-to-end query: index, write the report, show the document
pub fn run_query(
    input: &Path,
    output: &Path,
    queries: &[String],
    console: Console,
) -> Result<()> {
    let document = load(input, console)?;
    let outcome = analyze(&document.text, queries);

    write_report(output, &outcome.gaps)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;
    console.note(format_args!(
        "wrote {} rows to {}",
        outcome.gaps.len(),
        output.display()
    ));

    if !console.quiet {
        let text = display_text(&document.text);
        let spans = compute_highlights(&text, queries)?;
        print!("{}", compose_view(&text, &spans, &outcome.gaps, console.color));
    }

    console.note("Done.");
    Ok(())
}

/// Run the report command: load a persisted report and expand it
pub fn run_report(path: &Path, config: RenderConfig, console: Console) -> Result<()> {
    let gaps = load_report(path).context("Failed to load report")?;
    console.note(format_args!("{} rows in {}", gaps.len(), path.display()));

    let positions = from_gaps(&gaps);
    print(&occurrence_items(&positions, &gaps), config);
    Ok(())
}

/// One error item per [`QueryError`] in the cause chain of `err`
pub fn error_items(err: &anyhow::Error) -> ResultSet {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<QueryError>())
        .map(|query_err| ResultItem::error(ErrorInfo::from(query_err)))
        .collect()
}

/// Emit a failed command as error items when the output is machine-readable
pub fn emit_failure(err: &anyhow::Error, config: RenderConfig) {
    if !matches!(config.format, OutputFormat::Jsonl | OutputFormat::Json) {
        return;
    }
    let items = error_items(err);
    if !items.is_empty() {
        print(&items, config);
    }
}
