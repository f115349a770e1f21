use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_kanji;

#[derive(Deserialize)]
struct KanjiConfig {
    readings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanjiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[readings] table is empty")]
    Empty,
    #[error("key is not a single kanji: {0}")]
    NotKanji(String),
    #[error("reading for {0} must be non-empty lowercase ASCII")]
    InvalidReading(String),
    #[error("kanji table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `BTreeMap<kanji, romaji>`.
pub fn parse_kanji_toml(toml_str: &str) -> Result<BTreeMap<char, String>, KanjiConfigError> {
    let config: KanjiConfig =
        toml::from_str(toml_str).map_err(|e| KanjiConfigError::Parse(e.to_string()))?;

    if config.readings.is_empty() {
        return Err(KanjiConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in config.readings {
        let mut chars = key.chars();
        let kanji = match (chars.next(), chars.next()) {
            (Some(c), None) if is_kanji(c) => c,
            _ => return Err(KanjiConfigError::NotKanji(key)),
        };
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(KanjiConfigError::InvalidReading(key));
        }
        map.insert(kanji, value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[readings]
"活" = "katsu"
"用" = "you"
"#;
        let map = parse_kanji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&'活'], "katsu");
        assert_eq!(map[&'用'], "you");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_kanji_toml(super::super::DEFAULT_TOML).unwrap();
        assert!(map.len() > 150, "expected 150+ readings, got {}", map.len());
    }

    #[test]
    fn error_empty_readings() {
        let err = parse_kanji_toml("[readings]\n").unwrap_err();
        assert!(matches!(err, KanjiConfigError::Empty));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[readings]
"記事" = "kiji"
"#;
        let err = parse_kanji_toml(toml).unwrap_err();
        assert!(matches!(err, KanjiConfigError::NotKanji(_)));
    }

    #[test]
    fn error_kana_key() {
        let toml = r#"
[readings]
"あ" = "a"
"#;
        let err = parse_kanji_toml(toml).unwrap_err();
        assert!(matches!(err, KanjiConfigError::NotKanji(ref k) if k == "あ"));
    }

    #[test]
    fn error_invalid_reading() {
        for value in ["", "Katsu", "ka tsu", "かつ"] {
            let toml = format!("[readings]\n\"活\" = \"{value}\"\n");
            let err = parse_kanji_toml(&toml).unwrap_err();
            assert!(
                matches!(err, KanjiConfigError::InvalidReading(_)),
                "value {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kanji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, KanjiConfigError::Parse(_)));
    }
}
