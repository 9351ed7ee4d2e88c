//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Error taxonomy (QueryError)
//! - Document reading with metadata
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Common utilities

pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod util;
