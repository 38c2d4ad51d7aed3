//! Core domain types for the word guessing game
//!
//! Letters, words, catalog entries and the game state machine. Nothing here
//! touches the terminal.

mod entry;
mod game;
mod letter;
mod revealed;
mod word;

pub use entry::WordEntry;
pub use game::{Game, Guess, MAX_HINTS, MAX_WRONG_GUESSES, Verdict};
pub use letter::{Letter, LetterError};
pub use revealed::RevealedLetters;
pub use word::{Word, WordError};
