//! Results across sessions in one process

use super::{Game, Status};
use crate::core::MAX_GUESSES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    /// Wins by number of guesses used (index 0 = one guess)
    pub distribution: [usize; MAX_GUESSES],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Count a finished game; unfinished games are not counted
    pub fn record(&mut self, game: &Game) {
        match game.status() {
            Status::Won => {
                self.played += 1;
                self.won += 1;
                if let Some(bucket) = game
                    .attempts()
                    .checked_sub(1)
                    .and_then(|i| self.distribution.get_mut(i))
                {
                    *bucket += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Status::Lost => {
                self.played += 1;
                self.current_streak = 0;
            }
            Status::Loading | Status::InProgress => {}
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Key;
    use crate::wordlists::WordList;
    use std::rc::Rc;

    fn play(solution: &str, guesses: &[&str]) -> Game {
        let words = Rc::new(WordList::from_slice(&[
            "CRANE", "SLATE", "CRAZY", "LEVEL", "ELDER", "SPEED", "ROBOT",
        ]));
        let mut game = Game::new(words, Word::new(solution).unwrap());
        for guess in guesses {
            for c in guess.chars() {
                game = game.apply(Key::Letter(c));
            }
            game = game.apply(Key::Enter);
        }
        game
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_win_in_distribution() {
        let mut stats = Statistics::default();
        stats.record(&play("CRANE", &["slate", "crane"]));

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.distribution, [0, 1, 0, 0, 0, 0]);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn loss_resets_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record(&play("CRANE", &["crane"]));
        stats.record(&play("CRANE", &["crane"]));
        stats.record(&play(
            "CRANE",
            &["slate", "crazy", "level", "elder", "speed", "robot"],
        ));

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unfinished_game_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(&play("CRANE", &["slate"]));
        stats.record(&Game::loading());

        assert_eq!(stats, Statistics::default());
    }
}
