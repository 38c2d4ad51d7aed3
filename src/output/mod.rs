//! Terminal output formatting
//!
//! Display utilities for the line-based modes and helpers shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_catalog, print_game_over};
