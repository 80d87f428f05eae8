//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line-oriented modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;
use std::rc::Rc;
use wordle_game::{
    commands::{run_simple, score_words},
    interactive::{App, run_tui},
    output::{print_score_report, print_statistics},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for choosing the solution (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default 'info')
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        solution: String,
    },
}

/// Logs go to a file only; stderr would corrupt the TUI
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let source = WordSource::from_arg(&cli.wordlist);
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(source, rng),
        Commands::Simple => run_simple_command(&source, &mut rng),
        Commands::Score { guess, solution } => run_score_command(&guess, &solution),
    }
}

fn run_play_command(source: WordSource, rng: StdRng) -> Result<()> {
    let app = App::new(source.spawn(), rng);
    let stats = run_tui(app)?;
    if stats.played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(source: &WordSource, rng: &mut StdRng) -> Result<()> {
    let words = Rc::new(source.load()?);
    run_simple(&words, rng)?;
    Ok(())
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let report = score_words(guess, solution)?;
    print_score_report(&report);
    Ok(())
}
