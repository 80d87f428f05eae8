//! Guess scoring
//!
//! Every tile of a guess is classified against the solution:
//! - Green: letter in the correct position
//! - Orange: letter occurs elsewhere in the solution
//! - White: letter not in the solution (or all its occurrences already used)

use super::{WORD_LENGTH, Word};

/// Color classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Green,
    Orange,
    White,
}

/// Per-letter feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([TileColor; WORD_LENGTH]);

impl Score {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([TileColor::Green; WORD_LENGTH]);

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and consume that solution letter
    /// 2. Second pass: mark letters still present in the unconsumed pool orange,
    ///    consuming one occurrence per match
    ///
    /// A letter therefore never gets more green and orange tiles than it has
    /// occurrences in the solution.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Score, TileColor, Word};
    ///
    /// let guess = Word::new("elder").unwrap();
    /// let solution = Word::new("level").unwrap();
    /// let score = Score::calculate(&guess, &solution);
    ///
    /// use TileColor::{Green, Orange, White};
    /// assert_eq!(score.tiles(), &[Orange, Orange, White, Green, White]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        // `None` marks a consumed letter; it never matches again
        let mut pool: [Option<u8>; WORD_LENGTH] = (*solution.letters()).map(Some);
        let mut tiles = [TileColor::White; WORD_LENGTH];

        for (i, &letter) in guess.iter().enumerate() {
            if pool[i] == Some(letter) {
                tiles[i] = TileColor::Green;
                pool[i] = None;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if tiles[i] == TileColor::Green {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(letter)) {
                tiles[i] = TileColor::Orange;
                *slot = None;
            }
        }

        Self(tiles)
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileColor; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the tiles of a given color
    #[must_use]
    pub fn count(&self, color: TileColor) -> usize {
        self.0.iter().filter(|&&tile| tile == color).count()
    }

    /// Convert score to emoji string, e.g. "🟩🟧⬜🟩🟧"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|tile| match tile {
                TileColor::Green => '🟩',
                TileColor::Orange => '🟧',
                TileColor::White => '⬜',
            })
            .collect()
    }
}

/// Score `guess` against `solution`, returning the bare tile colors
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> [TileColor; WORD_LENGTH] {
    *Score::calculate(guess, solution).tiles()
}
