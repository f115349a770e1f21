use super::SyllableTable;

const SOKUON: char = 'っ';

/// Convert hiragana to romaji, scanning left to right with digraphs tried
/// before single characters.
///
/// A sokuon emits the first letter of the following syllable's romaji and the
/// following syllable is then scanned normally, so "って" becomes "tte".
/// Characters missing from the table (ASCII, unmapped kanji, symbols) are
/// copied through.
pub fn hiragana_to_romaji(input: &str) -> String {
    let table = SyllableTable::global();
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        if let Some(romaji) = next.and_then(|n| table.digraph(ch, n)) {
            result.push_str(romaji);
            i += 2;
            continue;
        }

        if let (SOKUON, Some(n)) = (ch, next) {
            if let Some(first) = table.single(n).and_then(|r| r.chars().next()) {
                result.push(first);
            }
            i += 1;
            continue;
        }

        match table.single(ch) {
            Some(romaji) => result.push_str(romaji),
            None => result.push(ch),
        }
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        assert_eq!(hiragana_to_romaji("あい"), "ai");
        assert_eq!(hiragana_to_romaji("あいうえお"), "aiueo");
    }

    #[test]
    fn test_digraph_beats_single_chars() {
        let table = SyllableTable::global();
        let split = format!(
            "{}{}",
            table.single('き').unwrap(),
            table.single('ゃ').unwrap()
        );
        assert_eq!(split, "kiya");
        assert_eq!(hiragana_to_romaji("きゃ"), "kya");
        assert_ne!(hiragana_to_romaji("きゃ"), split);
        assert_eq!(hiragana_to_romaji("とうきょう"), "toukyou");
        assert_eq!(hiragana_to_romaji("しゃしん"), "shashin");
    }

    #[test]
    fn test_sokuon_gemination() {
        assert_eq!(hiragana_to_romaji("って"), "tte");
        assert_eq!(hiragana_to_romaji("がっこう"), "gakkou");
        assert_eq!(hiragana_to_romaji("まっちゃ"), "maccha");
        assert_eq!(hiragana_to_romaji("ざっし"), "zasshi");
    }

    #[test]
    fn test_sokuon_uses_single_char_romaji_of_next() {
        // Lookup for the geminate marker is single-character, so "っきゃ"
        // doubles the k of き and then the digraph きゃ is scanned whole.
        assert_eq!(hiragana_to_romaji("っきゃ"), "kkya");
    }

    #[test]
    fn test_sokuon_at_end_emits_nothing() {
        assert_eq!(hiragana_to_romaji("あっ"), "a");
        assert_eq!(hiragana_to_romaji("っ"), "");
    }

    #[test]
    fn test_sokuon_before_unmapped_char() {
        assert_eq!(hiragana_to_romaji("っa"), "a");
        assert_eq!(hiragana_to_romaji("っー"), "");
        assert_eq!(hiragana_to_romaji("っっか"), "kka");
    }

    #[test]
    fn test_long_vowel_mark_is_silent() {
        assert_eq!(hiragana_to_romaji("でーた"), "deta");
        assert_eq!(hiragana_to_romaji("ー"), "");
    }

    #[test]
    fn test_unmapped_passthrough() {
        assert_eq!(hiragana_to_romaji("katsuの"), "katsuno");
        assert_eq!(hiragana_to_romaji("漢"), "漢");
        assert_eq!(hiragana_to_romaji("a b-c"), "a b-c");
        assert_eq!(hiragana_to_romaji(""), "");
    }

    #[test]
    fn test_loanword_digraphs() {
        assert_eq!(hiragana_to_romaji("うぇぶ"), "webu");
        assert_eq!(hiragana_to_romaji("ふぁいる"), "fairu");
        assert_eq!(hiragana_to_romaji("ぱーてぃー"), "pati");
    }
}
