//! Word Guess
//!
//! A hangman-style word guessing game for the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use word_guess::catalog::Catalog;
//! use word_guess::core::{Game, Letter};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut game = Game::new(&catalog, StdRng::seed_from_u64(1));
//!
//! game.select_letter(Letter::new('e').unwrap());
//! println!("Wrong guesses: {}", game.wrong_guesses());
//! ```

// Core domain types
pub mod core;

// Built-in word catalog
pub mod catalog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
