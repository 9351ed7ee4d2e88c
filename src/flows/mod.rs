//! Flows module - Commands that chain the core stages
//!
//! Provides:
//! - query: tokens, index, highlight, the end-to-end run, and report loading

pub mod query;

/// Where diagnostics go and how chatty they are
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    pub quiet: bool,
    pub verbose: bool,
    pub color: bool,
}

impl Console {
    /// Print a diagnostic to stderr in verbose mode
    pub fn note(&self, message: impl std::fmt::Display) {
        if self.verbose && !self.quiet {
            eprintln!("{}", message);
        }
    }
}
