//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::util::split_queries;
use crate::flows::Console;

/// qwords - locate query words in a text, report their gaps, and highlight them.
#[derive(Parser, Debug)]
#[command(name = "qwords")]
#[command(
    author,
    version,
    about,
    long_about = r#"qwords counts where query words occur in a document.

Tokens are separated by spaces and newlines. Parenthesized verse markers such
as (13) are skipped entirely, and the conjunction letter و directly after
whitespace is dropped so it does not start a token of its own.

For every query word the position of its first occurrence is reported,
followed by the number of tokens between each pair of consecutive
occurrences (the gaps).

Output formats:
- jsonl: one JSON object per line (default)
- json: a single JSON array
- md: human-friendly Markdown
- table: aligned columns, the same layout as report files
- raw: token text only

Examples:
    qwords run quran.txt --output gaps.txt "قال كتاب"
    qwords index quran.txt قال --format table
    qwords highlight quran.txt كتاب --show
    qwords report gaps.txt --format md
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/table/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        env = "QWORDS_FORMAT",
        value_name = "FORMAT",
        long_help = "Select the output format for results.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- table\n\
- raw"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        global = true,
        long_help = "Disable ANSI colors when showing highlighted text. NO_COLOR is honoured\n\
as well."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress diagnostics and, for `run`, the highlighted document view.\n\
The report file is still written."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print diagnostics (document size and hash, counts, report path) to stderr."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tokens of a document with their positions.
    #[command(long_about = "Tokenize FILE and emit every token with its 1-based position.\n\n\
Useful for checking how markers and the conjunction letter were handled.\n\n\
Example:\n\
  qwords tokens surah.txt --format table\n")]
    Tokens {
        /// Document to tokenize.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Report positions and gaps of query words.
    #[command(long_about = "Emit one occurrence item per query word found in FILE, sorted by word,\n\
with its absolute positions and its gaps. Words that never occur are omitted.\n\n\
Example:\n\
  qwords index surah.txt \"قال ربي\"\n")]
    Index {
        /// Document to search.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Query words (each argument is split on whitespace).
        #[arg(value_name = "QUERY", num_args = 0..)]
        queries: Vec<String>,
    },

    /// Compute highlight spans for query words.
    #[command(long_about = "Find every literal occurrence of each query word followed by a space or\n\
newline, and emit its character range and color. Colors rotate through a\n\
fixed palette in query order.\n\n\
Examples:\n\
  qwords highlight surah.txt كتاب\n\
  qwords highlight surah.txt \"قال كتاب\" --show\n")]
    Highlight {
        /// Document to highlight.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Query words (each argument is split on whitespace).
        #[arg(value_name = "QUERY", num_args = 0..)]
        queries: Vec<String>,

        /// Print the highlighted document instead of spans.
        #[arg(long)]
        show: bool,
    },

    /// Index, write the gap report, and show the highlighted document.
    #[command(long_about = "The full operation: tokenize FILE, index the query words, write the gap\n\
table to OUTPUT, then print the highlighted document followed by the table.\n\n\
Example:\n\
  qwords run surah.txt --output gaps.txt \"قال كتاب\"\n")]
    Run {
        /// Document to search.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Report file to write.
        #[arg(long, short, value_name = "OUTPUT")]
        output: PathBuf,

        /// Query words (each argument is split on whitespace).
        #[arg(value_name = "QUERY", num_args = 0..)]
        queries: Vec<String>,
    },

    /// Load a report file and expand it back to positions.
    #[command(long_about = "Parse a report written by `run` and emit its occurrences, with absolute\n\
positions recovered from the gaps.\n\n\
Example:\n\
  qwords report gaps.txt --format md\n")]
    Report {
        /// Report file to load.
        #[arg(value_name = "REPORT")]
        file: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let console = Console {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color: !cli.no_color,
    };

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e| {
        console.note(format_args!("{}, falling back to jsonl", e));
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let result = dispatch(cli.command, render_config, console);
    if let Err(err) = &result {
        crate::flows::query::emit_failure(err, render_config);
    }
    result
}

fn dispatch(command: Commands, render_config: RenderConfig, console: Console) -> Result<()> {
    match command {
        Commands::Tokens { file } => crate::flows::query::run_tokens(&file, render_config, console),

        Commands::Index { file, queries } => {
            let queries = split_queries(&queries);
            crate::flows::query::run_index(&file, &queries, render_config, console)
        }

        Commands::Highlight {
            file,
            queries,
            show,
        } => {
            let queries = split_queries(&queries);
            crate::flows::query::run_highlight(&file, &queries, show, render_config, console)
        }

        Commands::Run {
            file,
            output,
            queries,
        } => {
            let queries = split_queries(&queries);
            crate::flows::query::run_query(&file, &output, &queries, console)
        }

        Commands::Report { file } => crate::flows::query::run_report(&file, render_config, console),
    }
}
