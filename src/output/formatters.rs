//! Formatting utilities shared by the TUI and the plain CLI

use crate::core::{Game, Letter, RevealedLetters, Word};

/// Placeholder shown for an unrevealed letter
pub const BLANK: char = '_';

/// Format a word with unrevealed letters blanked, letters separated by spaces
#[must_use]
pub fn masked_word(word: &Word, revealed: &RevealedLetters) -> String {
    let mut result = String::with_capacity(word.len() * 2);

    for (i, &letter) in word.letters().iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(if revealed.contains(letter) {
            letter.as_char()
        } else {
            BLANK
        });
    }

    result
}

/// Alphabet with chosen letters replaced by `·`
#[must_use]
pub fn keyboard_line(revealed: &RevealedLetters) -> String {
    Letter::alphabet()
        .map(|l| if revealed.contains(l) { '·' } else { l.as_char() })
        .collect()
}

/// Label for the hint action
#[must_use]
pub fn hint_label(game: &Game<'_>) -> String {
    format!("Use Hint ({} left)", game.hints_remaining())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u8, max: u8, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (usize::from(value) * width / usize::from(max)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(letters: &str) -> RevealedLetters {
        let mut revealed = RevealedLetters::new();
        for c in letters.chars() {
            revealed.insert(Letter::new(c).unwrap());
        }
        revealed
    }

    #[test]
    fn masked_word_all_hidden() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(masked_word(&word, &RevealedLetters::new()), "_ _ _");
    }

    #[test]
    fn masked_word_repeated_letters_revealed_together() {
        let word = Word::new("HELLO").unwrap();
        assert_eq!(masked_word(&word, &revealed("LZ")), "_ _ L L _");
    }

    #[test]
    fn masked_word_fully_revealed() {
        let word = Word::new("DOG").unwrap();
        assert_eq!(masked_word(&word, &revealed("GOD")), "D O G");
    }

    #[test]
    fn keyboard_line_marks_chosen() {
        let line = keyboard_line(&revealed("AC"));
        assert!(line.starts_with("·B·D"));
        assert_eq!(line.chars().count(), Letter::COUNT);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 3, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(3, 3, 6), "██████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(1, 3, 6), "██░░░░");
    }
}
