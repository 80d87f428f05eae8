//! Where the dictionary comes from
//!
//! The list is fetched once per process, off the UI thread, so the board can
//! be drawn (and typed into) while it is still loading.

use super::loader::{self, WordListError};
use super::{WORDS, WordList};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-separated list on disk
    File(PathBuf),
}

impl WordSource {
    /// Parse the `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the list on the current thread
    ///
    /// # Errors
    ///
    /// See [`loader::load_from_file`].
    pub fn load(&self) -> Result<WordList, WordListError> {
        match self {
            Self::Embedded => loader::non_empty(WordList::from_slice(WORDS)),
            Self::File(path) => loader::load_from_file(path),
        }
    }

    /// Load the list on a background thread
    ///
    /// The receiver yields exactly one result. If the loader thread dies the
    /// sender is dropped and the receiver reports disconnection instead.
    #[must_use]
    pub fn spawn(self) -> mpsc::Receiver<Result<WordList, WordListError>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = self.load();
            if let Err(err) = &result {
                log::warn!("Word list load failed: {err}");
            }
            // The receiver may be gone if the player quit while loading
            let _ = tx.send(result);
        });
        rx
    }
}
