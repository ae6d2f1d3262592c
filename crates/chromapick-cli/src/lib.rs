//! Shared utilities for chromapick-cli
//!
//! Argument parsing helpers and output formatting, kept out of `main.rs` so
//! they stay testable.

pub mod output;
pub mod parsers;

pub use output::{format_info, format_sample};
pub use parsers::parse_point;
