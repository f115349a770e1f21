//! Hiragana-to-romaji conversion.
//!
//! Uses a static syllable table with longest-match-first scanning, handling
//! sokuon (っ) gemination and palatalized digraphs (きゃ).

mod convert;
mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use convert::hiragana_to_romaji;

/// Syllable table split by key length so the scanner can check digraphs
/// before single characters without allocating lookup keys.
pub struct SyllableTable {
    monographs: HashMap<char, &'static str>,
    digraphs: HashMap<(char, char), &'static str>,
}

impl SyllableTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static SyllableTable {
        static INSTANCE: OnceLock<SyllableTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_pairs(table::SYLLABLES))
    }

    fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut monographs = HashMap::new();
        let mut digraphs = HashMap::new();
        for &(kana, romaji) in pairs {
            let mut chars = kana.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), None, _) => {
                    monographs.insert(a, romaji);
                }
                (Some(a), Some(b), None) => {
                    digraphs.insert((a, b), romaji);
                }
                _ => unreachable!("syllable keys are one or two characters: {kana:?}"),
            }
        }
        SyllableTable {
            monographs,
            digraphs,
        }
    }

    /// Romaji for a single character, `Some("")` for っ and ー.
    pub fn single(&self, c: char) -> Option<&'static str> {
        self.monographs.get(&c).copied()
    }

    /// Romaji for a two-character syllable such as きゃ.
    pub fn digraph(&self, first: char, second: char) -> Option<&'static str> {
        self.digraphs.get(&(first, second)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::is_hiragana;

    #[test]
    fn test_keys_are_one_or_two_hiragana() {
        for &(kana, _) in table::SYLLABLES {
            let n = kana.chars().count();
            assert!(n == 1 || n == 2, "bad key length for {kana:?}");
            assert!(
                kana.chars().all(|c| is_hiragana(c) || c == 'ー'),
                "non-hiragana key {kana:?}"
            );
        }
    }

    #[test]
    fn test_values_are_lowercase_ascii() {
        for &(kana, romaji) in table::SYLLABLES {
            assert!(
                romaji.chars().all(|c| c.is_ascii_lowercase()),
                "bad romaji for {kana:?}: {romaji:?}"
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let table = SyllableTable::global();
        assert_eq!(
            table.monographs.len() + table.digraphs.len(),
            table::SYLLABLES.len()
        );
    }

    #[test]
    fn test_lookup() {
        let table = SyllableTable::global();
        assert_eq!(table.single('か'), Some("ka"));
        assert_eq!(table.single('っ'), Some(""));
        assert_eq!(table.single('ー'), Some(""));
        assert_eq!(table.single('a'), None);
        assert_eq!(table.digraph('き', 'ゃ'), Some("kya"));
        assert_eq!(table.digraph('か', 'き'), None);
    }
}
