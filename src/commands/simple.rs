//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Game, Key, Statistics};
use crate::output::{print_board, print_statistics};
use crate::wordlists::WordList;
use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};
use std::rc::Rc;

/// Run the simple interactive CLI mode
///
/// Returns the statistics of the sessions played.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the word
/// list is empty.
pub fn run_simple<R: Rng + ?Sized>(words: &Rc<WordList>, rng: &mut R) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LENGTH}-letter word. Type a guess and press Enter.");
    println!("  G = right letter, right spot");
    println!("  O = letter is in the word, wrong spot");
    println!("  - = letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game once finished, 'stats'\n");

    let mut stats = Statistics::default();
    let mut game = Game::start(Rc::clone(words), rng)?;
    print_board(&game);

    while let Some(input) = get_user_input("Guess")? {
        match input.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "stats" => print_statistics(&stats),
            "new" if game.is_over() => {
                game = Game::start(Rc::clone(words), rng)?;
                println!("\n🔄 New game started!");
                print_board(&game);
            }
            _ if game.is_over() => {
                println!("Game over. Type 'new' to play again or 'quit' to exit.");
            }
            line => {
                if !is_word_shaped(line) {
                    println!("❌ Enter exactly {WORD_LENGTH} letters\n");
                    continue;
                }

                game = submit_line(game, &input);
                print_board(&game);

                if game.is_over() {
                    stats.record(&game);
                    println!("\nType 'new' to play again or 'quit' to exit.");
                } else {
                    game = clear_input(game);
                }
            }
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Whether a line can be typed as a complete guess
#[must_use]
pub fn is_word_shaped(line: &str) -> bool {
    line.chars().count() == WORD_LENGTH && line.chars().all(|c| c.is_ascii_alphabetic())
}

/// Type a whole line as letter keys, then press Enter
#[must_use]
pub fn submit_line(game: Game, line: &str) -> Game {
    line.chars()
        .map(Key::Letter)
        .fold(game, Game::apply)
        .apply(Key::Enter)
}

/// Backspace until the input row is empty
#[must_use]
pub fn clear_input(mut game: Game) -> Game {
    while !game.current_input().is_empty() {
        game = game.apply(Key::Backspace);
    }
    game
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
