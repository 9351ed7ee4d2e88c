//! Highlight module - Colored spans for query occurrences
//!
//! This module provides:
//! - The fixed color palette with circular lookup
//! - Literal span matching in character coordinates
//! - An ANSI terminal renderer for overlapping spans

pub mod ansi;
pub mod palette;
pub mod spans;
