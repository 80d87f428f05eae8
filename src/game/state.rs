//! Session state and its transitions
//!
//! A `Game` is a value: every input produces the next `Game` through
//! [`Game::apply`]. Nothing here draws anything or touches the terminal.

use super::Key;
use crate::core::{MAX_GUESSES, Score, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;
use std::fmt;
use std::rc::Rc;

/// Where the session is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Word list not available yet; typing works, submitting does not
    Loading,
    InProgress,
    Won,
    Lost,
}

/// Message shown under the board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Hint {
    #[default]
    None,
    UnknownWord,
    Won,
    Lost(Word),
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::UnknownWord => write!(f, "Unknown Word"),
            Self::Won => write!(f, "Congratulations, You won!"),
            Self::Lost(solution) => write!(f, "You lost! Solution: {solution}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyWordList,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Cannot pick a solution from an empty word list"),
        }
    }
}

impl std::error::Error for GameError {}

/// A committed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    /// Text as the player typed it
    pub typed: String,
    pub word: Word,
    pub score: Score,
}

/// One board row as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub text: String,
    /// Present only for committed guesses
    pub score: Option<Score>,
    /// The row currently receiving input
    pub active: bool,
}

impl Row {
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.score.is_some()
    }
}

#[derive(Debug, Clone)]
struct Session {
    words: Rc<WordList>,
    solution: Word,
}

/// One play session
#[derive(Debug, Clone)]
pub struct Game {
    session: Option<Session>,
    slots: [Option<Guess>; MAX_GUESSES],
    current_input: String,
    status: Status,
    hint: Hint,
}

impl Game {
    /// A session whose word list has not arrived yet
    #[must_use]
    pub fn loading() -> Self {
        Self {
            session: None,
            slots: Default::default(),
            current_input: String::new(),
            status: Status::Loading,
            hint: Hint::None,
        }
    }

    /// A playable session with a known solution
    #[must_use]
    pub fn new(words: Rc<WordList>, solution: Word) -> Self {
        Self::loading().install(words, solution)
    }

    /// A playable session with a randomly chosen solution
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if there is nothing to choose from.
    pub fn start<R: Rng + ?Sized>(words: Rc<WordList>, rng: &mut R) -> Result<Self, GameError> {
        Self::loading().with_word_list(words, rng)
    }

    /// Finish loading: store the word list and pick the solution
    ///
    /// Input typed while loading is kept. A game that already has its word
    /// list is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if there is nothing to choose from.
    pub fn with_word_list<R: Rng + ?Sized>(
        self,
        words: Rc<WordList>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if self.status != Status::Loading {
            return Ok(self);
        }
        let solution = words.choose(rng).cloned().ok_or(GameError::EmptyWordList)?;
        Ok(self.install(words, solution))
    }

    fn install(mut self, words: Rc<WordList>, solution: Word) -> Self {
        log::info!("Session started with {} words", words.len());
        self.session = Some(Session { words, solution });
        self.status = Status::InProgress;
        self
    }

    /// Apply one key press and return the resulting state
    ///
    /// Finished games ignore all input.
    ///
    /// # Examples
    /// ```
    /// use std::rc::Rc;
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, Key, Status};
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = Rc::new(WordList::from_slice(&["CRANE", "SLATE"]));
    /// let mut game = Game::new(words, Word::new("CRANE").unwrap());
    /// for c in "crane".chars() {
    ///     game = game.apply(Key::Letter(c));
    /// }
    /// let game = game.apply(Key::Enter);
    /// assert_eq!(game.status(), Status::Won);
    /// ```
    #[must_use]
    pub fn apply(mut self, key: Key) -> Self {
        if self.is_over() {
            return self;
        }
        match key {
            Key::Letter(c) => {
                if self.current_input.chars().count() < WORD_LENGTH {
                    self.current_input.push(c);
                }
            }
            Key::Backspace => {
                self.current_input.pop();
                self.hint = Hint::None;
            }
            Key::Enter => self.submit(),
        }
        self
    }

    fn submit(&mut self) {
        if self.current_input.chars().count() != WORD_LENGTH {
            return;
        }
        // Submitting before the word list arrives is ignored
        let Some(session) = &self.session else {
            log::debug!("Ignoring submission while loading");
            return;
        };

        let word = match Word::new(self.current_input.as_str()) {
            Ok(word) if session.words.contains(&word) => word,
            _ => {
                self.hint = Hint::UnknownWord;
                return;
            }
        };

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return;
        };

        let score = Score::calculate(&word, &session.solution);
        log::debug!("Guess {} {word} {}", index + 1, score.to_emoji());

        self.hint = Hint::None;
        if word == session.solution {
            self.status = Status::Won;
            self.hint = Hint::Won;
        } else if index == MAX_GUESSES - 1 {
            self.status = Status::Lost;
            self.hint = Hint::Lost(session.solution.clone());
        }
        if self.is_over() {
            log::info!("Session over: {:?} after {} guesses", self.status, index + 1);
        }

        self.slots[index] = Some(Guess {
            typed: std::mem::take(&mut self.current_input),
            word,
            score,
        });
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn hint(&self) -> &Hint {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.status, Status::Won | Status::Lost)
    }

    /// Committed guesses in order
    pub fn guesses(&self) -> impl Iterator<Item = &Guess> {
        self.slots.iter().map_while(Option::as_ref)
    }

    /// Number of committed guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses().count()
    }

    /// The word list, once loaded
    #[must_use]
    pub fn word_list(&self) -> Option<&Rc<WordList>> {
        self.session.as_ref().map(|session| &session.words)
    }

    /// Board contents for display
    ///
    /// Filled slots show their guess; the first empty slot shows the input
    /// being typed, unless the game is over; other slots are blank.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let active = if self.is_over() {
            None
        } else {
            self.slots.iter().position(Option::is_none)
        };

        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(guess) => Row {
                    text: guess.typed.clone(),
                    score: Some(guess.score),
                    active: false,
                },
                None if active == Some(i) => Row {
                    text: self.current_input.clone(),
                    score: None,
                    active: true,
                },
                None => Row::default(),
            })
            .collect()
    }

    /// The hidden word; only for tests
    #[cfg(any(test, feature = "test-support"))]
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.session.as_ref().map(|session| &session.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileColor::{Green, Orange, White};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "CRANE", "SLATE", "CRAZY", "LEVEL", "ELDER", "SPEED", "ROBOT", "FLOOR", "TRAIN",
    ];

    fn words() -> Rc<WordList> {
        Rc::new(WordList::from_slice(WORDS))
    }

    fn game_with(solution: &str) -> Game {
        Game::new(words(), Word::new(solution).unwrap())
    }

    fn type_word(game: Game, text: &str) -> Game {
        text.chars().fold(game, |game, c| game.apply(Key::Letter(c)))
    }

    fn guess(game: Game, text: &str) -> Game {
        type_word(game, text).apply(Key::Enter)
    }

    #[test]
    fn new_game_is_in_progress_and_empty() {
        let game = game_with("CRANE");

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.hint(), &Hint::None);
        assert_eq!(game.current_input(), "");
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.solution().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn start_picks_solution_from_list() {
        let list = words();
        let mut rng = StdRng::seed_from_u64(1);
        let game = Game::start(Rc::clone(&list), &mut rng).unwrap();

        assert_eq!(game.status(), Status::InProgress);
        assert!(list.contains(game.solution().unwrap()));
    }

    #[test]
    fn start_with_empty_list_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Game::start(Rc::new(WordList::default()), &mut rng);

        assert!(matches!(result, Err(GameError::EmptyWordList)));
    }

    #[test]
    fn letters_append_up_to_word_length() {
        let game = type_word(game_with("CRANE"), "cranes");
        assert_eq!(game.current_input(), "crane");
    }

    #[test]
    fn backspace_on_empty_input_is_noop() {
        let game = game_with("CRANE").apply(Key::Backspace);
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn backspace_removes_last_letter_and_clears_hint() {
        let game = guess(game_with("CRANE"), "abcde");
        assert_eq!(game.hint(), &Hint::UnknownWord);

        let game = game.apply(Key::Backspace);
        assert_eq!(game.current_input(), "abcd");
        assert_eq!(game.hint(), &Hint::None);
    }

    #[test]
    fn short_submission_is_ignored() {
        let game = guess(game_with("CRANE"), "cra");

        assert_eq!(game.current_input(), "cra");
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.hint(), &Hint::None);
    }

    #[test]
    fn unknown_word_keeps_input_and_slots() {
        let game = guess(game_with("CRANE"), "qwert");

        assert_eq!(game.hint(), &Hint::UnknownWord);
        assert_eq!(game.hint().to_string(), "Unknown Word");
        assert_eq!(game.current_input(), "qwert");
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.status(), Status::InProgress);
    }

    #[test]
    fn valid_guess_is_committed_in_typed_case() {
        let game = guess(game_with("CRANE"), "CraZy");

        assert_eq!(game.attempts(), 1);
        assert_eq!(game.current_input(), "");
        let committed = game.guesses().next().unwrap();
        assert_eq!(committed.typed, "CraZy");
        assert_eq!(committed.word.text(), "CRAZY");
        assert_eq!(
            committed.score.tiles(),
            &[Green, Green, Green, White, White]
        );
    }

    #[test]
    fn typing_and_resubmitting_keep_unknown_word_hint() {
        let game = guess(game_with("CRANE"), "qwert");
        let game = guess(game, "x");

        assert_eq!(game.hint(), &Hint::UnknownWord);
        assert_eq!(game.current_input(), "qwert");
    }

    #[test]
    fn correct_guess_wins_immediately() {
        let game = guess(game_with("CRANE"), "slate");
        let game = guess(game, "crane");

        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.hint(), &Hint::Won);
        assert_eq!(game.hint().to_string(), "Congratulations, You won!");
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn six_misses_lose_and_reveal_solution() {
        let mut game = game_with("CRANE");
        for text in ["slate", "crazy", "level", "elder", "speed"] {
            game = guess(game, text);
            assert_eq!(game.status(), Status::InProgress);
        }
        let game = guess(game, "robot");

        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.attempts(), MAX_GUESSES);
        assert_eq!(game.hint().to_string(), "You lost! Solution: CRANE");
    }

    #[test]
    fn winning_on_last_slot_is_a_win() {
        let mut game = game_with("CRANE");
        for text in ["slate", "crazy", "level", "elder", "speed"] {
            game = guess(game, text);
        }
        let game = guess(game, "crane");

        assert_eq!(game.status(), Status::Won);
    }

    #[test]
    fn finished_game_ignores_input() {
        let game = guess(game_with("CRANE"), "crane");
        let after = guess(game.clone(), "slate").apply(Key::Backspace);

        assert_eq!(after.status(), Status::Won);
        assert_eq!(after.current_input(), "");
        assert_eq!(after.attempts(), 1);
        assert_eq!(after.hint(), game.hint());
    }

    #[test]
    fn loading_accepts_typing_but_rejects_submit() {
        let game = guess(Game::loading(), "crane");

        assert_eq!(game.status(), Status::Loading);
        assert_eq!(game.current_input(), "crane");
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.hint(), &Hint::None);
        assert!(game.solution().is_none());
    }

    #[test]
    fn with_word_list_keeps_typed_input() {
        let mut rng = StdRng::seed_from_u64(9);
        let game = type_word(Game::loading(), "sla")
            .with_word_list(words(), &mut rng)
            .unwrap();

        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.current_input(), "sla");
    }

    #[test]
    fn with_word_list_after_loading_is_noop() {
        let mut rng = StdRng::seed_from_u64(9);
        let game = game_with("CRANE")
            .with_word_list(Rc::new(WordList::from_slice(&["SLATE"])), &mut rng)
            .unwrap();

        assert_eq!(game.solution().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn rows_follow_rendering_contract() {
        let game = guess(game_with("LEVEL"), "elder");
        let game = type_word(game, "sp");
        let rows = game.rows();

        assert_eq!(rows.len(), MAX_GUESSES);
        assert_eq!(rows[0].text, "elder");
        assert!(rows[0].finished());
        assert_eq!(
            rows[0].score.map(|s| *s.tiles()),
            Some([Orange, Orange, White, Green, White])
        );
        assert_eq!(rows[1].text, "sp");
        assert!(rows[1].active);
        assert!(!rows[1].finished());
        assert!(rows[2..].iter().all(|row| row.text.is_empty() && !row.active));
    }

    #[test]
    fn rows_have_no_active_slot_after_win() {
        let game = guess(game_with("CRANE"), "crane");
        assert!(game.rows().iter().all(|row| !row.active));
    }
}
