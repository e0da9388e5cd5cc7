//! Word bank with per-cycle exhaustion.
//!
//! The bank hands out every known word once before any word repeats. When
//! all words of the current cycle have been used, the cycle resets and the
//! whole bank becomes available again.

use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Normalize a word the way the bank stores it: trimmed and uppercased.
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Known words plus the subset already drawn in the current cycle.
///
/// # Example
///
/// ```rust
/// use gallows::WordBank;
///
/// let mut bank = WordBank::from_words(["one", "two"]);
/// let first = bank.next().unwrap();
/// let second = bank.next().unwrap();
///
/// assert_ne!(first, second);
/// assert!(bank.is_exhausted());
/// assert!(bank.contains("ONE"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    words: HashSet<String>,
    used: HashSet<String>,
}

impl WordBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::new();
        bank.add(words);
        bank
    }

    /// Merge words into the bank, trimming and uppercasing each one.
    ///
    /// Duplicates collapse and blank strings are skipped. Returns how many
    /// words were not already known.
    pub fn add<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.insert(word.as_ref()))
            .count()
    }

    /// Add a single word. Returns `false` if it was already known or blank.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Draw a word not yet used in this cycle, using the thread-local RNG.
    pub fn next(&mut self) -> Option<String> {
        self.next_with(&mut rand::thread_rng())
    }

    /// Draw a word not yet used in this cycle.
    ///
    /// When every word has been used (including the empty-bank case) the
    /// cycle resets first. Returns `None` only when the bank is empty.
    pub fn next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.is_exhausted() {
            debug!(words = self.words.len(), "word bank exhausted, starting new cycle");
            self.used.clear();
        }

        let word = self
            .words
            .iter()
            .filter(|word| !self.used.contains(*word))
            .choose(rng)?
            .clone();
        self.used.insert(word.clone());
        Some(word)
    }

    /// Remove a word from the bank. Returns whether it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&normalize(word))
    }

    /// Remove several words. Returns how many were present.
    pub fn remove_all<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.remove(word.as_ref()))
            .count()
    }

    /// Forget every word. The used set is left alone.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Whether every word in the bank has been drawn this cycle.
    ///
    /// Words removed from the bank after being drawn no longer count, so
    /// shrinking the bank can make it exhausted immediately.
    pub fn is_exhausted(&self) -> bool {
        self.used_len() == self.words.len()
    }

    /// Number of bank words drawn in the current cycle.
    pub fn used_len(&self) -> usize {
        self.used.iter().filter(|word| self.words.contains(*word)).count()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Every word in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn add_normalizes_and_deduplicates() {
        let mut bank = WordBank::new();
        assert_eq!(bank.add(["apple", "APPLE", "Pear"]), 2);
        assert_eq!(bank.add(["pear"]), 0);
        assert_eq!(bank.sorted(), vec!["APPLE", "PEAR"]);
    }

    #[test]
    fn add_skips_empty_words() {
        let mut bank = WordBank::new();
        assert_eq!(bank.add(["", "A"]), 1);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn padded_words_are_trimmed() {
        let mut bank = WordBank::new();
        assert_eq!(bank.add([" owl ", "OWL", "\tkitty cat\n"]), 2);
        assert_eq!(bank.sorted(), vec!["KITTY CAT", "OWL"]);
        assert!(bank.contains("  owl"));
    }

    #[test]
    fn blank_words_are_skipped() {
        let mut bank = WordBank::new();
        assert!(!bank.insert("   "));
        assert_eq!(bank.add(["\t", " ", "A"]), 1);
        assert_eq!(bank.sorted(), vec!["A"]);
    }

    #[test]
    fn empty_bank_yields_nothing() {
        let mut bank = WordBank::new();
        assert!(bank.is_exhausted());
        assert_eq!(bank.next(), None);
    }

    #[test]
    fn cycle_covers_every_word_before_repeating() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bank = WordBank::from_words(["A", "B", "C", "D", "E"]);

        for _ in 0..3 {
            let mut seen = HashSet::new();
            for drawn in 1..=bank.len() {
                let word = bank.next_with(&mut rng).unwrap();
                assert!(seen.insert(word), "word repeated within a cycle");
                assert_eq!(bank.used_len(), drawn);
            }
            assert!(bank.is_exhausted());
        }
    }

    #[test]
    fn used_resets_when_exhausted() {
        let mut bank = WordBank::from_words(["123", "456"]);
        bank.next();
        bank.next();
        assert_eq!(bank.used_len(), 2);

        let word = bank.next().unwrap();
        assert!(word == "123" || word == "456");
        assert_eq!(bank.used_len(), 1);
    }

    #[test]
    fn removing_used_words_can_exhaust_bank() {
        let mut bank = WordBank::from_words(["A", "B"]);
        let drawn = bank.next().unwrap();
        let other = if drawn == "A" { "B" } else { "A" };
        assert!(!bank.is_exhausted());

        assert!(bank.remove(other));
        assert!(bank.is_exhausted());
        assert_eq!(bank.next(), Some(drawn));
    }

    #[test]
    fn remove_all_counts_present_words() {
        let mut bank = WordBank::from_words(["A", "B", "C"]);
        assert_eq!(bank.remove_all(["a", "c", "z"]), 2);
        assert_eq!(bank.sorted(), vec!["B"]);
    }

    #[test]
    fn clear_empties_bank() {
        let mut bank = WordBank::from_words(["A", "B"]);
        bank.next();
        bank.clear();
        assert!(bank.is_empty());
        assert!(bank.is_exhausted());
        assert_eq!(bank.next(), None);
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let bank = WordBank::from_words(["Kitty Cat"]);
        assert!(bank.contains("kitty cat"));
        assert!(!bank.contains("kitty"));
    }
}
