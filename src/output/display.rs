//! Display functions for command results

use super::formatters::{board_lines, colored_word, score_symbols};
use crate::commands::ScoreReport;
use crate::game::{Game, Hint, Statistics};
use colored::Colorize;

/// Print a single scored guess
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        report.guess.text().bright_yellow().bold(),
        report.solution.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}   {}   {}",
        colored_word(report.guess.text(), Some(&report.score)),
        report.score.to_emoji(),
        score_symbols(&report.score)
    );
    if report.score.is_perfect() {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the board and the current hint
pub fn print_board(game: &Game) {
    println!();
    for line in board_lines(&game.rows()) {
        println!("{line}");
    }
    match game.hint() {
        Hint::None => {}
        hint @ Hint::Won => println!("\n{}", hint.to_string().green().bold()),
        hint @ (Hint::UnknownWord | Hint::Lost(_)) => {
            println!("\n{}", hint.to_string().red().bold());
        }
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("   Played:       {}", stats.played);
    println!("   Win rate:     {:.0}%", stats.win_rate());
    println!("   Streak:       {} (max {})", stats.current_streak, stats.max_streak);

    if stats.won > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (i, &count) in stats.distribution.iter().enumerate() {
            let bar_width = count * 30 / stats.won;
            println!(
                "   {}: {} {count}",
                i + 1,
                "█".repeat(bar_width.max(usize::from(count > 0))).green()
            );
        }
    }
}
