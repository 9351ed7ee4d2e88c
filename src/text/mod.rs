//! Text module - Boundary detection and tokenization
//!
//! This module provides:
//! - The boundary state machine (marker skipping, conjunction adjacency)
//! - Token splitting driven by that state machine

pub mod boundary;
pub mod tokenize;
