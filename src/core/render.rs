//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, table, raw

use crate::core::model::{Kind, ResultItem, ResultSet};
use crate::report::table::align_rows;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Table,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "table" => Ok(OutputFormat::Table),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Table => self.render_table(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut tokens = Vec::new();
        let mut occurrences = Vec::new();
        let mut highlights = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Token => tokens.push(item),
                Kind::Occurrence => occurrences.push(item),
                Kind::Highlight => highlights.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !tokens.is_empty() {
            output.push_str("## Tokens\n\n");
            for item in tokens {
                output.push_str(&format!(
                    "{}. `{}`\n",
                    item.position.unwrap_or_default(),
                    item.text.as_deref().unwrap_or_default()
                ));
            }
            output.push('\n');
        }

        if !occurrences.is_empty() {
            output.push_str("## Occurrences\n\n");
            output.push_str("| Token | Positions | Gaps |\n");
            output.push_str("|-------|-----------|------|\n");
            for item in occurrences {
                output.push_str(&format!(
                    "| `{}` | {} | {} |\n",
                    item.text.as_deref().unwrap_or_default(),
                    join_numbers(item.positions.as_deref()),
                    join_numbers(item.gaps.as_deref())
                ));
            }
            output.push('\n');
        }

        if !highlights.is_empty() {
            output.push_str("## Highlights\n\n");
            for item in highlights {
                self.render_highlight_md(&mut output, item);
            }
            output.push('\n');
        }

        output
    }

    fn render_highlight_md(&self, output: &mut String, item: &ResultItem) {
        output.push_str(&format!("- `{}`", item.text.as_deref().unwrap_or_default()));
        if let Some(range) = &item.range {
            output.push_str(&format!(" (chars {}-{})", range.start, range.end));
        }
        if let Some(color) = &item.color {
            output.push_str(&format!(" color `{}`", color));
        }
        output.push('\n');
    }

    /// Render as an aligned table, one row per item
    fn render_table(&self, result_set: &ResultSet) -> String {
        let rows: Vec<Vec<String>> = result_set.items.iter().map(table_row).collect();
        align_rows(&rows)
    }

    /// Render as raw output (for debugging)
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| item.text.clone())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_numbers(values: Option<&[usize]>) -> String {
    values
        .unwrap_or_default()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn table_row(item: &ResultItem) -> Vec<String> {
    let text = item.text.clone().unwrap_or_default();
    match item.kind {
        Kind::Token => vec![item.position.unwrap_or_default().to_string(), text],
        Kind::Occurrence => std::iter::once(text)
            .chain(
                item.gaps
                    .iter()
                    .flatten()
                    .map(|g| g.to_string()),
            )
            .collect(),
        Kind::Highlight => {
            let mut row = vec![text];
            if let Some(range) = &item.range {
                row.push(range.start.to_string());
                row.push(range.end.to_string());
            }
            if let Some(color) = &item.color {
                row.push(color.to_string());
            }
            row
        }
        Kind::Error => item
            .errors
            .iter()
            .flat_map(|e| [e.code.clone(), e.message.clone()])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ErrorInfo;
    use crate::highlight::palette::PALETTE;
    use crate::highlight::spans::HighlightSpan;

    fn occurrences() -> ResultSet {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::occurrence("a", vec![2, 6], vec![2, 3]));
        result_set.push(ResultItem::occurrence("b", vec![1, 3], vec![1, 1]));
        result_set
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&occurrences());

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("\"kind\":\"occurrence\""));
        assert!(output.contains("\"gaps\":[2,3]"));
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&occurrences());

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_json_empty() {
        let renderer = Renderer::new(OutputFormat::Json);
        assert_eq!(renderer.render(&ResultSet::new()), "[]");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("Table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "invalid".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_config() {
        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, true);
        assert!(config.pretty);
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(!config.pretty);
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let output = Renderer::with_config(config).render(&occurrences());
        assert!(output.contains("  "));
    }

    #[test]
    fn test_render_table_matches_report_layout() {
        let output = Renderer::new(OutputFormat::Table).render(&occurrences());
        assert_eq!(output, "a  2  3  \nb  1  1  \n");
    }

    #[test]
    fn test_render_table_tokens() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::token(1, "الر"));
        result_set.push(ResultItem::token(10, "كتاب"));
        let output = Renderer::new(OutputFormat::Table).render(&result_set);
        assert_eq!(output, "1   الر   \n10  كتاب  \n");
    }

    #[test]
    fn test_render_markdown_sections() {
        let mut result_set = occurrences();
        result_set.push(ResultItem::highlight(&HighlightSpan {
            query: "a".to_string(),
            start: 0,
            end: 1,
            color: PALETTE[0],
        }));
        result_set.push(ResultItem::error(ErrorInfo::new("TEST_ERROR", "boom")));

        let output = Renderer::new(OutputFormat::Markdown).render(&result_set);
        assert!(output.contains("## Errors"));
        assert!(output.contains("**TEST_ERROR**: boom"));
        assert!(output.contains("## Occurrences"));
        assert!(output.contains("| `a` | 2, 6 | 2, 3 |"));
        assert!(output.contains("## Highlights"));
        assert!(output.contains("(chars 0-1) color `255 60 60`"));
    }

    #[test]
    fn test_render_markdown_empty() {
        let output = Renderer::new(OutputFormat::Markdown).render(&ResultSet::new());
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_raw() {
        let output = Renderer::new(OutputFormat::Raw).render(&occurrences());
        assert_eq!(output, "a\nb");
    }
}
