//! Word catalog
//!
//! The fixed list of sample words the game draws from, embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{CATALOG, CATALOG_COUNT};

use crate::core::WordEntry;
use loader::entries_from_slice;
use rand::Rng;
use std::fmt;

/// Error type for catalog construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Catalog must contain at least one valid word"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Non-empty, immutable list of word entries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<WordEntry>,
}

impl Catalog {
    /// # Errors
    /// Returns `CatalogError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The built-in sample catalog
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` if no embedded entry is a valid word.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(entries_from_slice(CATALOG))
    }

    /// Pick an entry uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        &self.entries[rng.random_range(0..self.entries.len())]
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; construction rejects empty catalogs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn catalog_count_matches_const() {
        assert_eq!(CATALOG.len(), CATALOG_COUNT);
    }

    #[test]
    fn catalog_words_are_uppercase_letters() {
        for &(word, description) in CATALOG {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
            assert!(!description.is_empty(), "Word '{word}' has no description");
        }
    }

    #[test]
    fn builtin_keeps_every_entry() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), CATALOG_COUNT);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn expected_sample_words() {
        let catalog = Catalog::builtin().unwrap();
        let words: Vec<&str> = catalog.entries().iter().map(|e| e.word.text()).collect();
        assert_eq!(
            words,
            [
                "HELLO",
                "WORLD",
                "JAVASCRIPT",
                "REACT",
                "PROGRAMMING",
                "GEEKSFORGEEKS"
            ]
        );
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn pick_random_returns_catalog_entry() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let picked = catalog.pick_random(&mut rng);
            assert!(catalog.entries().contains(picked));
        }
    }
}
