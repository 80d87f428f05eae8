//! Wordle
//!
//! A terminal word-guessing game: find the hidden five-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Score, Word};
//!
//! let guess = Word::new("crazy").unwrap();
//! let solution = Word::new("crane").unwrap();
//!
//! let score = Score::calculate(&guess, &solution);
//! println!("{}", score.to_emoji());
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
