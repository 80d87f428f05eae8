//! Word list loading utilities
//!
//! Provides functions to load word lists from files.

use super::WordList;
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io { path: PathBuf, source: io::Error },
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Load words from a file, one word per line
///
/// Blank lines are ignored and invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and
/// `WordListError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_words(&content);
    log::info!("Loaded {} words from {}", list.len(), path.display());
    non_empty(list)
}

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    let mut skipped = 0usize;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                skipped += 1;
                log::warn!("Skipping word list entry {line:?}: {err}");
                None
            }
        })
        .collect::<Vec<_>>();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid word list entries");
    }

    WordList::from_words(words)
}

pub(crate) fn non_empty(list: WordList) -> Result<WordList, WordListError> {
    if list.is_empty() {
        Err(WordListError::Empty)
    } else {
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_words_skips_blank_and_invalid() {
        let list = parse_words("crane\n\n  slate  \nnope\nsh0rt\nLEVEL\n");

        assert_eq!(list.len(), 3);
        assert!(list.contains_text("CRANE"));
        assert!(list.contains_text("SLATE"));
        assert!(list.contains_text("LEVEL"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("valid", "crane\nslate\n");
        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_from_file_rejects_empty_list() {
        let path = temp_file("empty", "\nxx\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
