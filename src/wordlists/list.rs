//! The playable dictionary

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Set of valid words
///
/// Keeps the words in load order for uniform random selection, plus a hash
/// set for membership checks.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from words, dropping duplicates
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word.clone()) {
                list.words.push(word);
            }
        }
        list
    }

    /// Convert an embedded string slice, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{WORDS, WordList};
    ///
    /// let list = WordList::from_slice(WORDS);
    /// assert_eq!(list.len(), WORDS.len());
    /// assert!(list.contains_text("crane"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Case-insensitive membership check on raw text
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` for an empty list.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
