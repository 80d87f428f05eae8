//! Terminal output formatting
//!
//! Display utilities for the line-oriented modes.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_score_report, print_statistics};
