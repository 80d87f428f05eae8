//! Game controller
//!
//! Owns the session state, turns key presses into state transitions and
//! decides when the game is over.

mod key;
mod state;
mod stats;

pub use key::Key;
pub use state::{Game, GameError, Guess, Hint, Row, Status};
pub use stats::Statistics;
