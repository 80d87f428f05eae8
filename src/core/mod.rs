//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod word;

pub use score::{Score, TileColor, score};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board, i.e. attempts per session
pub const MAX_GUESSES: usize = 6;
