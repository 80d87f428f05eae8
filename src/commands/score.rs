//! Score command
//!
//! Scores a single guess against a given solution, outside of any game.

use crate::core::{Score, Word, WordError};

/// Result of scoring one guess
pub struct ScoreReport {
    pub guess: Word,
    pub solution: Word,
    pub score: Score,
}

/// Score `guess` against `solution`
///
/// Neither word needs to be in a word list.
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreReport, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let score = Score::calculate(&guess, &solution);

    Ok(ScoreReport {
        guess,
        solution,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileColor::{Green, White};

    #[test]
    fn score_words_normalizes_case() {
        let report = score_words("crazy", "CRANE").unwrap();

        assert_eq!(report.guess.text(), "CRAZY");
        assert_eq!(report.solution.text(), "CRANE");
        assert_eq!(report.score.tiles(), &[Green, Green, Green, White, White]);
    }

    #[test]
    fn score_words_rejects_invalid_guess() {
        assert!(matches!(
            score_words("cra", "crane"),
            Err(WordError::InvalidLength(3))
        ));
    }

    #[test]
    fn score_words_rejects_invalid_solution() {
        assert!(score_words("crane", "cr4ne").is_err());
    }

    #[test]
    fn score_words_identical_is_perfect() {
        assert!(score_words("level", "LEVEL").unwrap().score.is_perfect());
    }
}
