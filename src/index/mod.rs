//! Index module - Query positions and their gap form
//!
//! This module provides:
//! - The absolute position index (1-based token ordinals per query)
//! - The gap transform and its inverse

pub mod gaps;
pub mod positions;
