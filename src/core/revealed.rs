//! Letters chosen by the player
//!
//! An insertion-ordered set: membership drives rendering and win checks,
//! insertion order drives undo.

use super::letter::Letter;

/// Insertion-ordered set of chosen letters
///
/// Membership is a 26-bit mask; order is kept in a side vector so the most
/// recently added letter can be removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedLetters {
    order: Vec<Letter>,
    mask: u32,
}

impl RevealedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1 << letter.index()) != 0
    }

    /// Add a letter if absent
    ///
    /// Returns `false` when the letter was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.mask |= 1 << letter.index();
        self.order.push(letter);
        true
    }

    /// Remove and return the most recently added letter
    pub fn pop_last(&mut self) -> Option<Letter> {
        let letter = self.order.pop()?;
        self.mask &= !(1 << letter.index());
        Some(letter)
    }

    #[must_use]
    pub fn last(&self) -> Option<Letter> {
        self.order.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.mask = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn insert_adds_once() {
        let mut revealed = RevealedLetters::new();
        assert!(revealed.insert(letter('A')));
        assert!(!revealed.insert(letter('A')));
        assert_eq!(revealed.len(), 1);
        assert!(revealed.contains(letter('A')));
        assert!(!revealed.contains(letter('B')));
    }

    #[test]
    fn pop_last_follows_insertion_order() {
        let mut revealed = RevealedLetters::new();
        revealed.insert(letter('Z'));
        revealed.insert(letter('B'));
        revealed.insert(letter('M'));

        assert_eq!(revealed.pop_last(), Some(letter('M')));
        assert!(!revealed.contains(letter('M')));
        assert_eq!(revealed.last(), Some(letter('B')));
        assert_eq!(revealed.pop_last(), Some(letter('B')));
        assert_eq!(revealed.pop_last(), Some(letter('Z')));
        assert_eq!(revealed.pop_last(), None);
        assert!(revealed.is_empty());
    }

    #[test]
    fn popped_letter_can_be_added_again() {
        let mut revealed = RevealedLetters::new();
        revealed.insert(letter('Q'));
        revealed.pop_last();
        assert!(revealed.insert(letter('Q')));
    }

    #[test]
    fn iter_preserves_order() {
        let mut revealed = RevealedLetters::new();
        for c in ['D', 'O', 'G'] {
            revealed.insert(letter(c));
        }
        let letters: String = revealed.iter().map(Letter::as_char).collect();
        assert_eq!(letters, "DOG");
    }

    #[test]
    fn clear_empties_set() {
        let mut revealed = RevealedLetters::new();
        revealed.insert(letter('A'));
        revealed.insert(letter('B'));
        revealed.clear();
        assert!(revealed.is_empty());
        assert!(!revealed.contains(letter('A')));
        assert_eq!(revealed, RevealedLetters::new());
    }
}
