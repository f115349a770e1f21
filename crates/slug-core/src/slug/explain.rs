use serde::Serialize;

use crate::kanji::KanjiTable;
use crate::settings::settings;

use super::run_stages;

/// Intermediate results of every pipeline stage for one title.
#[derive(Debug, Serialize)]
pub struct SlugExplanation {
    pub input: String,
    /// Whether the Japanese pipeline ran.
    pub japanese: bool,
    /// After katakana → hiragana.
    pub normalized: Option<String>,
    /// After kanji readings were substituted.
    pub kanji_resolved: Option<String>,
    /// After hiragana → romaji.
    pub romaji: Option<String>,
    pub sanitized: String,
    /// Final slug, equal to `generate_slug(input)`.
    pub slug: String,
    /// Kanji dropped for lack of a reading.
    pub unmapped_kanji: Vec<char>,
}

/// Run the slug pipeline and capture each stage.
pub fn explain_slug(text: &str) -> SlugExplanation {
    explain_with(text, KanjiTable::global(), settings().slug.max_length)
}

fn explain_with(text: &str, table: &KanjiTable, max_length: usize) -> SlugExplanation {
    let stages = run_stages(text, table, max_length);
    let unmapped_kanji = stages
        .romanized
        .as_ref()
        .map(|r| table.unmapped(&r.normalized))
        .unwrap_or_default();

    SlugExplanation {
        input: text.to_string(),
        japanese: stages.romanized.is_some(),
        normalized: stages.romanized.as_ref().map(|r| r.normalized.clone()),
        kanji_resolved: stages.romanized.as_ref().map(|r| r.kanji_resolved.clone()),
        romaji: stages.romanized.map(|r| r.romaji),
        sanitized: stages.sanitized,
        slug: stages.slug,
        unmapped_kanji,
    }
}
