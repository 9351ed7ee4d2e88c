//! qwords - Query word positions and gaps for classical text corpora
//!
//! qwords provides:
//! - Tokenization with verse-marker skipping and conjunction handling
//! - Position and gap indexes for a list of query words
//! - Color-rotating highlight spans in character offsets
//! - Gap reports that can be written and loaded again

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;
mod highlight;
mod index;
mod report;
mod text;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
