//! TUI rendering with ratatui
//!
//! Draws the board, the hint line and a status bar.

use super::app::App;
use crate::core::{MAX_GUESSES, TileColor, WORD_LENGTH};
use crate::game::{Hint, Row, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(TILE_HEIGHT * MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(3), // Hint
            Constraint::Min(0), // Spacer
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_hint(f, app, chunks[2]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); MAX_GUESSES])
        .split(area);

    for (row, row_area) in app.game.rows().iter().zip(rows.iter()) {
        render_row(f, row, *row_area);
    }
}

fn render_row(f: &mut Frame, row: &Row, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(TILE_WIDTH); WORD_LENGTH])
        .flex(Flex::Center)
        .split(area);

    let mut letters = row.text.chars();
    for (i, tile_area) in tiles.iter().enumerate() {
        let letter = letters.next().map_or(' ', |c| c.to_ascii_uppercase());
        let color = row.score.map(|score| score.tiles()[i]);
        render_tile(f, letter, color, row.active, *tile_area);
    }
}

fn render_tile(f: &mut Frame, letter: char, color: Option<TileColor>, active: bool, area: Rect) {
    let block = if active {
        Block::new().borders(Borders::ALL).border_set(border::DOUBLE)
    } else {
        Block::new().borders(Borders::ALL)
    };

    let style = match color {
        None => Style::default(),
        Some(TileColor::Green) => Style::default()
            .bg(Color::LightGreen)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(TileColor::Orange) => Style::default()
            .bg(Color::Rgb(255, 165, 0))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(TileColor::White) => Style::default().bg(Color::White).fg(Color::Black),
    };

    let tile = Paragraph::new(letter.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    f.render_widget(tile, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = if let Some(err) = &app.load_error {
        (format!("Word list unavailable: {err}"), Color::Red)
    } else if app.is_loading() {
        ("Loading word list...".to_string(), Color::DarkGray)
    } else {
        let color = match app.game.hint() {
            Hint::Won => Color::Green,
            Hint::UnknownWord | Hint::Lost(_) => Color::Red,
            Hint::None => Color::White,
        };
        (app.game.hint().to_string(), color)
    };

    let hint = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(hint, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.game.status() {
        Status::Loading => "Loading".to_string(),
        Status::InProgress => format!("Guess {}/{MAX_GUESSES}", app.game.attempts() + 1),
        Status::Won => "Won".to_string(),
        Status::Lost => "Lost".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!("Streak: {}", app.stats.current_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.game.is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
