//! Word lists for the game
//!
//! The dictionary doubles as the pool the solution is drawn from. An embedded
//! list is compiled into the binary; custom lists can be loaded from files.

mod embedded;
mod list;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;
pub use loader::WordListError;
pub use source::WordSource;
