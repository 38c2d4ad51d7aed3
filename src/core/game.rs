//! Game state machine
//!
//! Owns the active word, the chosen letters and the hint/wrong-guess counters.
//! Every operation is a complete transition; callers render from the accessors.

use super::entry::WordEntry;
use super::letter::Letter;
use super::revealed::RevealedLetters;
use crate::catalog::Catalog;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Hints available at the start of every round
pub const MAX_HINTS: u8 = 3;

/// Wrong guesses that end the round
pub const MAX_WRONG_GUESSES: u8 = 3;

/// Result of selecting a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess<'a> {
    /// Letter was already chosen; nothing changed
    AlreadyChosen,
    /// Letter occurs in the word
    Hit,
    /// Letter is absent from the word
    Miss,
    /// Too many wrong guesses. The game has already restarted with a new word;
    /// `lost` is the word that was being guessed.
    GameOver { lost: &'a WordEntry },
}

/// Outcome of an explicit guess evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Solved,
    NotYet,
}

impl Verdict {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Solved => "Congratulations! You guessed the word correctly! 🎉",
            Self::NotYet => "Wrong guess! Try again.",
        }
    }
}

/// Hangman game state
pub struct Game<'a> {
    catalog: &'a Catalog,
    active: &'a WordEntry,
    revealed: RevealedLetters,
    hints_remaining: u8,
    wrong_guesses: u8,
    verdict: Option<Verdict>,
    rng: StdRng,
}

impl<'a> Game<'a> {
    /// Start a game with a random word from `catalog`
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use word_guess::catalog::Catalog;
    /// use word_guess::core::{Game, MAX_HINTS};
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// let game = Game::new(&catalog, StdRng::seed_from_u64(7));
    /// assert_eq!(game.hints_remaining(), MAX_HINTS);
    /// assert!(game.revealed().is_empty());
    /// ```
    #[must_use]
    pub fn new(catalog: &'a Catalog, mut rng: StdRng) -> Self {
        let active = catalog.pick_random(&mut rng);
        debug!(word = active.word.text(), "game started");

        Self {
            catalog,
            active,
            revealed: RevealedLetters::new(),
            hints_remaining: MAX_HINTS,
            wrong_guesses: 0,
            verdict: None,
            rng,
        }
    }

    /// Draw a word uniformly at random from the catalog
    pub fn pick_random_word(&mut self) -> &'a WordEntry {
        self.catalog.pick_random(&mut self.rng)
    }

    /// Choose a letter
    ///
    /// Re-selecting a chosen letter is a no-op. A letter absent from the word
    /// counts as a wrong guess; the third wrong guess restarts the game and
    /// returns `Guess::GameOver`.
    pub fn select_letter(&mut self, letter: Letter) -> Guess<'a> {
        if !self.revealed.insert(letter) {
            return Guess::AlreadyChosen;
        }

        if self.active.word.has_letter(letter) {
            debug!(%letter, "letter hit");
            return Guess::Hit;
        }

        self.wrong_guesses += 1;
        debug!(%letter, wrong_guesses = self.wrong_guesses, "letter miss");

        if self.wrong_guesses >= MAX_WRONG_GUESSES {
            let lost = self.active;
            info!(word = lost.word.text(), "game over");
            self.restart();
            return Guess::GameOver { lost };
        }

        Guess::Miss
    }

    /// Reveal the leftmost letter of the word not yet chosen
    ///
    /// Returns the revealed letter, or `None` when no hints remain or every
    /// letter is already shown. A hint is only spent when it reveals a letter.
    pub fn use_hint(&mut self) -> Option<Letter> {
        if self.hints_remaining == 0 {
            return None;
        }

        let letter = self
            .active
            .word
            .distinct_letters()
            .find(|&l| !self.revealed.contains(l))?;

        self.revealed.insert(letter);
        self.hints_remaining -= 1;
        debug!(%letter, hints_remaining = self.hints_remaining, "hint used");

        Some(letter)
    }

    /// Remove the most recently chosen letter
    ///
    /// The wrong-guess count is not reverted.
    pub fn undo_last_guess(&mut self) -> Option<Letter> {
        let letter = self.revealed.pop_last()?;
        debug!(%letter, "guess undone");
        Some(letter)
    }

    #[must_use]
    pub fn is_word_fully_revealed(&self) -> bool {
        self.active
            .word
            .letters()
            .iter()
            .all(|&l| self.revealed.contains(l))
    }

    /// Check the current reveal state and record the result message
    pub fn evaluate_guess(&mut self) -> Verdict {
        let verdict = if self.is_word_fully_revealed() {
            info!(word = self.active.word.text(), "word solved");
            Verdict::Solved
        } else {
            Verdict::NotYet
        };
        self.verdict = Some(verdict);
        verdict
    }

    /// New random word, all counters reset
    pub fn restart(&mut self) {
        self.active = self.pick_random_word();
        self.revealed.clear();
        self.hints_remaining = MAX_HINTS;
        self.wrong_guesses = 0;
        self.verdict = None;
        debug!(word = self.active.word.text(), "game restarted");
    }

    #[must_use]
    pub const fn active(&self) -> &'a WordEntry {
        self.active
    }

    #[must_use]
    pub const fn revealed(&self) -> &RevealedLetters {
        &self.revealed
    }

    #[must_use]
    pub fn is_chosen(&self, letter: Letter) -> bool {
        self.revealed.contains(letter)
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub fn result_message(&self) -> Option<&'static str> {
        self.verdict.map(Verdict::message)
    }

    /// Undo and Guess need at least one chosen letter
    #[must_use]
    pub fn has_choices(&self) -> bool {
        !self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn single_word_catalog(word: &str) -> Catalog {
        Catalog::new(vec![WordEntry::new(word, "test word").unwrap()]).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn new_game(catalog: &Catalog) -> Game<'_> {
        Game::new(catalog, StdRng::seed_from_u64(42))
    }

    #[test]
    fn new_game_starts_fresh() {
        let catalog = single_word_catalog("CAT");
        let game = new_game(&catalog);
        assert_eq!(game.active().word.text(), "CAT");
        assert!(game.revealed().is_empty());
        assert_eq!(game.hints_remaining(), MAX_HINTS);
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.verdict(), None);
        assert!(!game.has_choices());
    }

    #[test]
    fn select_letter_hit_and_miss() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        assert_eq!(game.select_letter(letter('C')), Guess::Hit);
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.select_letter(letter('Z')), Guess::Miss);
        assert_eq!(game.wrong_guesses(), 1);
        assert!(game.is_chosen(letter('Z')));
    }

    #[test]
    fn select_letter_twice_is_noop() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        game.select_letter(letter('Q'));
        assert_eq!(game.select_letter(letter('Q')), Guess::AlreadyChosen);
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.revealed().len(), 1);
    }

    #[test]
    fn third_miss_restarts() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        game.select_letter(letter('C'));
        assert_eq!(game.select_letter(letter('X')), Guess::Miss);
        assert_eq!(game.select_letter(letter('Y')), Guess::Miss);
        game.use_hint();

        match game.select_letter(letter('Z')) {
            Guess::GameOver { lost } => assert_eq!(lost.word.text(), "CAT"),
            other => panic!("expected game over, got {other:?}"),
        }
        assert!(game.revealed().is_empty());
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.hints_remaining(), MAX_HINTS);
    }

    #[test]
    fn hint_reveals_leftmost_missing_letter() {
        let catalog = single_word_catalog("HELLO");
        let mut game = new_game(&catalog);

        game.select_letter(letter('H'));
        assert_eq!(game.use_hint(), Some(letter('E')));
        assert_eq!(game.use_hint(), Some(letter('L')));
        assert_eq!(game.use_hint(), Some(letter('O')));
        assert_eq!(game.hints_remaining(), 0);
        assert!(game.is_word_fully_revealed());
    }

    #[test]
    fn hint_not_spent_when_word_revealed() {
        let catalog = single_word_catalog("AA");
        let mut game = new_game(&catalog);

        assert_eq!(game.use_hint(), Some(letter('A')));
        assert_eq!(game.use_hint(), None);
        assert_eq!(game.hints_remaining(), MAX_HINTS - 1);
    }

    #[test]
    fn hint_with_none_left_is_noop() {
        let catalog = single_word_catalog("PROGRAMMING");
        let mut game = new_game(&catalog);

        for _ in 0..MAX_HINTS {
            assert!(game.use_hint().is_some());
        }
        let before = game.revealed().clone();
        assert_eq!(game.use_hint(), None);
        assert_eq!(game.revealed(), &before);
        assert_eq!(game.hints_remaining(), 0);
    }

    #[test]
    fn undo_keeps_wrong_guess_penalty() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        game.select_letter(letter('Q'));
        assert_eq!(game.undo_last_guess(), Some(letter('Q')));
        assert!(game.revealed().is_empty());
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.undo_last_guess(), None);
    }

    #[test]
    fn undo_removes_hinted_letter() {
        let catalog = single_word_catalog("DOG");
        let mut game = new_game(&catalog);

        game.use_hint();
        assert_eq!(game.undo_last_guess(), Some(letter('D')));
        assert_eq!(game.hints_remaining(), MAX_HINTS - 1);
    }

    #[test]
    fn evaluate_guess_sets_message() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        assert_eq!(game.evaluate_guess(), Verdict::NotYet);
        assert_eq!(game.result_message(), Some("Wrong guess! Try again."));

        for c in ['C', 'A', 'T'] {
            game.select_letter(letter(c));
        }
        assert_eq!(game.evaluate_guess(), Verdict::Solved);
        assert_eq!(game.result_message(), Some(Verdict::Solved.message()));
    }

    #[test]
    fn restart_resets_everything() {
        let catalog = single_word_catalog("CAT");
        let mut game = new_game(&catalog);

        game.select_letter(letter('X'));
        game.use_hint();
        game.evaluate_guess();
        game.restart();

        assert!(game.revealed().is_empty());
        assert_eq!(game.hints_remaining(), MAX_HINTS);
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.result_message(), None);
    }
}
