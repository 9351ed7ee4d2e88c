//! Report module - Serializing and loading the gap index
//!
//! This module provides:
//! - Tab-stop aligned tables (elastic columns, padding of two)
//! - Writing the gap table to a report file and loading it back

pub mod store;
pub mod table;
