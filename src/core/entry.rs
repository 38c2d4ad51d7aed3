//! Catalog entry: a word and the description shown as its clue

use super::word::{Word, WordError};

/// Immutable word/description pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: Word,
    pub description: String,
}

impl WordEntry {
    /// # Errors
    /// Returns `WordError` if `word` is not a valid `A`-`Z` word.
    pub fn new(word: &str, description: impl Into<String>) -> Result<Self, WordError> {
        Ok(Self {
            word: Word::new(word)?,
            description: description.into(),
        })
    }
}
