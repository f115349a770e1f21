//! Best-effort kanji-to-romaji readings.
//!
//! Each kanji maps to a single reading taken from a TOML table. The default
//! table is embedded at build time; a replacement may be installed with
//! `KanjiTable::init_custom` before first use. Kanji without a reading are
//! left in place for the sanitizer to drop.

mod config;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub use config::{parse_kanji_toml, KanjiConfigError};

use crate::unicode::is_kanji;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_kanji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default kanji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

pub struct KanjiTable {
    readings: HashMap<char, String>,
}

impl KanjiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanjiConfigError> {
        // Validate eagerly
        parse_kanji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanjiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanjiTable {
        static INSTANCE: OnceLock<KanjiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_kanji_toml(toml_str).expect("kanji TOML must be valid");
            KanjiTable::from_map(map)
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<KanjiTable, KanjiConfigError> {
        parse_kanji_toml(toml_str).map(KanjiTable::from_map)
    }

    fn from_map(map: BTreeMap<char, String>) -> KanjiTable {
        KanjiTable {
            readings: map.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn reading(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }

    /// Replace every mapped kanji with its reading. Everything else, unmapped
    /// kanji included, is copied unchanged. No separators are inserted.
    pub fn resolve(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match self.reading(c) {
                Some(romaji) => result.push_str(romaji),
                None => result.push(c),
            }
        }
        result
    }

    /// Kanji in `text` that have no reading, in first-seen order.
    pub fn unmapped(&self, text: &str) -> Vec<char> {
        let mut seen = Vec::new();
        for c in text.chars() {
            if is_kanji(c) && self.reading(c).is_none() && !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }
}

/// `KanjiTable::resolve` against the global table.
pub fn kanji_to_romaji(text: &str) -> String {
    KanjiTable::global().resolve(text)
}
