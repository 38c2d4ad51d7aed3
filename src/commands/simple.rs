//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{Game, Guess, Letter, Verdict};
use crate::output::{print_board, print_game_over};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A player action typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Letter),
    Hint,
    Undo,
    Guess,
    Restart,
    Help,
    Quit,
}

impl Command {
    /// Parse a prompt line
    ///
    /// A single character selects that letter; longer input is a command word.
    ///
    /// # Examples
    /// ```
    /// use word_guess::commands::Command;
    ///
    /// assert!(matches!(Command::parse("e"), Some(Command::Select(_))));
    /// assert_eq!(Command::parse("hint"), Some(Command::Hint));
    /// assert_eq!(Command::parse("4"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let mut chars = input.chars();

        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Letter::new(c).ok().map(Self::Select);
        }

        match input.as_str() {
            "hint" => Some(Self::Hint),
            "undo" => Some(Self::Undo),
            "guess" => Some(Self::Guess),
            "restart" | "new" => Some(Self::Restart),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Guess - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        print_board(game);

        let Some(input) = get_user_input("\nLetter or command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let Some(command) = Command::parse(&input) else {
            println!("{}", "❌ Enter a single letter A-Z or a command ('help').".red());
            continue;
        };

        match command {
            Command::Select(letter) => match game.select_letter(letter) {
                Guess::AlreadyChosen => println!("{letter} was already chosen."),
                Guess::Hit => println!("{}", format!("✓ {letter} is in the word").green()),
                Guess::Miss => println!("{}", format!("✗ {letter} is not in the word").red()),
                Guess::GameOver { lost } => {
                    print_game_over(lost.word.text());
                    get_user_input("Press Enter to start a new word")?;
                }
            },
            Command::Hint => match game.use_hint() {
                Some(letter) => println!("💡 Revealed {letter}"),
                None if game.hints_remaining() == 0 => println!("No hints left!"),
                None => println!("Every letter is already shown."),
            },
            Command::Undo => match game.undo_last_guess() {
                Some(letter) => println!("✓ Removed {letter}"),
                None => println!("Nothing to undo!"),
            },
            Command::Guess => {
                if game.has_choices() {
                    if game.evaluate_guess() == Verdict::Solved {
                        println!("Type 'new' for another word.");
                    }
                } else {
                    println!("Choose at least one letter first.");
                }
            }
            Command::Restart => {
                game.restart();
                println!("\n🔄 New word chosen!");
            }
            Command::Help => print_help(),
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("Type a letter to choose it, or one of:");
    println!("  hint     reveal the next hidden letter");
    println!("  undo     remove the last chosen letter");
    println!("  guess    check whether the word is complete");
    println!("  new      start over with a new word");
    println!("  quit     exit\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        assert_eq!(
            Command::parse("q"),
            Some(Command::Select(Letter::new('Q').unwrap()))
        );
        assert_eq!(
            Command::parse("  X \n"),
            Some(Command::Select(Letter::new('X').unwrap()))
        );
    }

    #[test]
    fn parse_command_words() {
        assert_eq!(Command::parse("HINT"), Some(Command::Hint));
        assert_eq!(Command::parse("undo"), Some(Command::Undo));
        assert_eq!(Command::parse("guess"), Some(Command::Guess));
        assert_eq!(Command::parse("new"), Some(Command::Restart));
        assert_eq!(Command::parse("restart"), Some(Command::Restart));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse("ab"), None);
    }
}
