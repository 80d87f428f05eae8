//! Key presses understood by the game

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// A single player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An ASCII letter, in the case it was typed
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Map an external key-press given as logical key value and physical code
    ///
    /// Uses web-style names: a letter press has a physical code `KeyA`..`KeyZ`;
    /// the typed character is the logical key if it is a single ASCII letter,
    /// otherwise the letter of the code.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::parse("a", "KeyA"), Some(Key::Letter('a')));
    /// assert_eq!(Key::parse("Enter", "Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("1", "Digit1"), None);
    /// ```
    #[must_use]
    pub fn parse(key: &str, code: &str) -> Option<Self> {
        match key {
            "Enter" => return Some(Self::Enter),
            "Backspace" => return Some(Self::Backspace),
            _ => {}
        }

        let code_letter = code
            .strip_prefix("Key")
            .filter(|rest| rest.len() == 1)
            .and_then(|rest| rest.chars().next())
            .filter(char::is_ascii_alphabetic)?;

        let mut chars = key.chars();
        let typed = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => code_letter.to_ascii_lowercase(),
        };
        Some(Self::Letter(typed))
    }

    /// Map a crossterm key event; only presses count
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match event.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Enter),
            _ => None,
        }
    }
}
