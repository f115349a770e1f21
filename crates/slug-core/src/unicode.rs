//! Character-level Unicode classification for Japanese titles.

/// Offset between a Katakana code point and its Hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC) and the middle dot ・ (U+30FB).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs as used for Japanese titles (U+4E00..U+9FAF).
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FAF}').contains(&c)
}

/// Katakana letters that have a Hiragana twin exactly `KATAKANA_OFFSET` below
/// (ァ U+30A1 ..= ヶ U+30F6).
fn has_hiragana_twin(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// True when `text` holds at least one Hiragana, Katakana or Kanji character.
pub fn contains_japanese(text: &str) -> bool {
    text.chars()
        .any(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c))
}

/// Convert a katakana string to hiragana.
/// Characters without a hiragana twin (ー, ・, ヷ, ASCII, etc.) pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_hiragana_twin(c) {
                char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
