//! Colored plain-text printing for the line-based modes

use super::formatters::{create_progress_bar, hint_label, keyboard_line, masked_word};
use crate::catalog::Catalog;
use crate::core::{Game, MAX_WRONG_GUESSES};
use colored::Colorize;

/// Print the current board: word, clue, letters and counters
pub fn print_board(game: &Game<'_>) {
    let entry = game.active();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "  {}",
        masked_word(&entry.word, game.revealed())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("Hint: {}", entry.description.italic());
    println!("Letters: {}", keyboard_line(game.revealed()));

    let wrong = game.wrong_guesses();
    println!(
        "Wrong Guesses: {} {wrong} / {MAX_WRONG_GUESSES}",
        create_progress_bar(wrong, MAX_WRONG_GUESSES, 12).red()
    );
    println!("{}", hint_label(game).bright_black());

    if let Some(message) = game.result_message() {
        if game.is_word_fully_revealed() {
            println!("\n{}", message.green().bold());
        } else {
            println!("\n{}", message.red().bold());
        }
    }
}

/// Print the game-over banner for a lost word
pub fn print_game_over(word: &str) {
    println!("\n{}", "═".repeat(60).bright_red());
    println!(
        "{}",
        "  Game Over! You made too many wrong guesses.".red().bold()
    );
    println!("  The word was {}", word.bright_yellow().bold());
    println!("{}", "═".repeat(60).bright_red());
}

/// Print every catalog entry with its description
pub fn print_catalog(catalog: &Catalog) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, entry) in catalog.entries().iter().enumerate() {
        println!(
            "\n{}. {} ({} letters)",
            (i + 1).to_string().bright_black(),
            entry.word.text().bright_white().bold(),
            entry.word.len()
        );
        println!("   {}", entry.description);
    }
}
