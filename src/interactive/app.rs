//! TUI application state and logic

use crate::game::{Game, Key, Statistics, Status};
use crate::wordlists::{WordList, WordListError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// One-shot channel delivering the word list
pub type PendingWords = Receiver<Result<WordList, WordListError>>;

/// Application state
pub struct App {
    pub game: Game,
    pub stats: Statistics,
    pub load_error: Option<String>,
    pub should_quit: bool,
    words: Option<Rc<WordList>>,
    pending: Option<PendingWords>,
    rng: StdRng,
}

impl App {
    /// Start with the word list still loading
    #[must_use]
    pub fn new(pending: PendingWords, rng: StdRng) -> Self {
        Self {
            game: Game::loading(),
            stats: Statistics::default(),
            load_error: None,
            should_quit: false,
            words: None,
            pending: Some(pending),
            rng,
        }
    }

    /// Check whether the word list has arrived and start the session if so
    pub fn poll_word_list(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let result = match pending.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.load_error = Some("Word list loader stopped unexpectedly".to_string());
                return;
            }
        };
        self.pending = None;

        match result {
            Ok(list) => {
                let words = Rc::new(list);
                let game = std::mem::replace(&mut self.game, Game::loading());
                match game.clone().with_word_list(Rc::clone(&words), &mut self.rng) {
                    Ok(started) => {
                        self.game = started;
                        self.words = Some(words);
                    }
                    Err(err) => {
                        self.game = game;
                        self.load_error = Some(err.to_string());
                    }
                }
            }
            Err(err) => {
                log::error!("Word list unavailable: {err}");
                self.load_error = Some(err.to_string());
            }
        }
    }

    /// Feed one key press to the game
    pub fn press(&mut self, key: Key) {
        if self.game.is_over() {
            return;
        }
        let game = std::mem::replace(&mut self.game, Game::loading());
        self.game = game.apply(key);
        if self.game.is_over() {
            self.stats.record(&self.game);
        }
    }

    /// Replace a finished game with a fresh session on the same word list
    pub fn new_game(&mut self) {
        if !self.game.is_over() {
            return;
        }
        let Some(words) = &self.words else {
            return;
        };
        match Game::start(Rc::clone(words), &mut self.rng) {
            Ok(game) => self.game = game,
            Err(err) => self.load_error = Some(err.to_string()),
        }
    }

    /// Route a terminal key event
    pub fn handle_key_event(&mut self, key: &KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if self.game.is_over() => self.should_quit = true,
            KeyCode::Char('n') if self.game.is_over() => self.new_game(),
            _ => {
                if let Some(input) = Key::from_event(key) {
                    self.press(input);
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.game.status() == Status::Loading
    }
}

/// Terminal in raw mode on the alternate screen
///
/// Acquired for the lifetime of the session; dropping it restores the
/// terminal, also on early return.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    let mut guard = TerminalGuard::acquire()?;
    let stats = run_app(&mut guard.terminal, app)?;
    drop(guard);
    Ok(stats)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    while !app.should_quit {
        app.poll_word_list();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(&key);
            }
        }
    }

    Ok(app.stats)
}

/// Channel for tests and callers that already hold a word list
#[must_use]
pub fn ready(list: WordList) -> PendingWords {
    let (tx, rx) = mpsc::channel();
    // The receiver is returned, so this send cannot fail
    let _ = tx.send(Ok(list));
    rx
}
