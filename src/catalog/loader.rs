//! Catalog conversion utilities

use crate::core::WordEntry;

/// Convert embedded `(word, description)` pairs to entries
///
/// Invalid words are skipped.
///
/// # Examples
/// ```
/// use word_guess::catalog::loader::entries_from_slice;
/// use word_guess::catalog::CATALOG;
///
/// let entries = entries_from_slice(CATALOG);
/// assert_eq!(entries.len(), CATALOG.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(word, description)| WordEntry::new(word, description).ok())
        .collect()
}
