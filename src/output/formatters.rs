//! Formatting utilities for terminal output

use crate::core::{Score, TileColor, WORD_LENGTH};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Symbol used for a tile in plain text
#[must_use]
pub const fn tile_symbol(color: TileColor) -> char {
    match color {
        TileColor::Green => 'G',
        TileColor::Orange => 'O',
        TileColor::White => '-',
    }
}

/// Plain text form of a score, e.g. "GO-G-"
#[must_use]
pub fn score_symbols(score: &Score) -> String {
    score.tiles().iter().map(|&tile| tile_symbol(tile)).collect()
}

fn colored_tile(letter: char, color: Option<TileColor>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match color {
        Some(TileColor::Green) => tile.black().on_green().bold(),
        Some(TileColor::Orange) => tile.black().on_yellow().bold(),
        Some(TileColor::White) => tile.black().on_white(),
        None => tile.normal(),
    }
}

/// Render a word as colored tiles
///
/// Without a score the tiles are uncolored. Missing letters are padded with
/// underscores so every row has the same width.
#[must_use]
pub fn colored_word(text: &str, score: Option<&Score>) -> String {
    let mut letters = text.chars();
    (0..WORD_LENGTH)
        .map(|i| {
            let letter = letters.next().unwrap_or('_');
            colored_tile(letter, score.map(|s| s.tiles()[i])).to_string()
        })
        .collect()
}

/// One line per board row
#[must_use]
pub fn board_lines(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let marker = if row.active { ">" } else { " " };
            format!("{marker} {}", colored_word(&row.text, row.score.as_ref()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn score_symbols_elder_vs_level() {
        let score = Score::calculate(&Word::new("elder").unwrap(), &Word::new("level").unwrap());
        assert_eq!(score_symbols(&score), "OO-G-");
    }

    #[test]
    fn score_symbols_perfect() {
        assert_eq!(score_symbols(&Score::PERFECT), "GGGGG");
    }

    #[test]
    fn colored_word_pads_short_input() {
        colored::control::set_override(false);
        assert_eq!(colored_word("ab", None), " A  B  _  _  _ ");
    }

    #[test]
    fn board_lines_marks_active_row() {
        colored::control::set_override(false);
        let rows = vec![
            Row {
                text: "cr".to_string(),
                score: None,
                active: true,
            },
            Row::default(),
        ];
        let lines = board_lines(&rows);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("> "));
        assert!(lines[1].starts_with("  "));
    }
}
