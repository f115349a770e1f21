//! Title-to-slug pipeline.
//!
//! Japanese titles go through katakana normalization → kanji readings →
//! hiragana-to-romaji → sanitization. Titles without Japanese characters are
//! only sanitized. Every input produces a slug, possibly empty.

mod explain;
mod unique;


use tracing::{debug, debug_span};

use crate::kana::hiragana_to_romaji;
use crate::kanji::KanjiTable;
use crate::sanitize::sanitize;
use crate::settings::settings;
use crate::unicode::{contains_japanese, katakana_to_hiragana};

pub use crate::sanitize::truncate_slug;
pub use explain::{explain_slug, SlugExplanation};
pub use unique::{unique_slug, unique_slug_with, UniqueSlugError};

/// Convert a title into a lowercase, hyphen-separated ASCII slug.
pub fn generate_slug(text: &str) -> String {
    let _span = debug_span!("generate_slug", input_len = text.len()).entered();

    let stages = run_stages(text, KanjiTable::global(), settings().slug.max_length);

    debug!(slug_len = stages.slug.len());
    stages.slug
}

/// Romanize the Japanese parts of `text`, leaving everything else in place.
/// The result is not yet a slug: case, spacing and symbols are untouched.
pub fn transliterate(text: &str) -> String {
    romanize(text, KanjiTable::global()).romaji
}

/// Output of the three Japanese stages.
struct Romanized {
    normalized: String,
    kanji_resolved: String,
    romaji: String,
}

fn romanize(text: &str, table: &KanjiTable) -> Romanized {
    let normalized = katakana_to_hiragana(text);
    let kanji_resolved = table.resolve(&normalized);
    debug!(unmapped_kanji = table.unmapped(&normalized).len());
    let romaji = hiragana_to_romaji(&kanji_resolved);
    Romanized {
        normalized,
        kanji_resolved,
        romaji,
    }
}

/// Every intermediate string of one pipeline run. The Japanese stages are
/// `None` when the title has no Japanese characters.
struct Stages {
    romanized: Option<Romanized>,
    sanitized: String,
    slug: String,
}

fn run_stages(text: &str, table: &KanjiTable, max_length: usize) -> Stages {
    let romanized = contains_japanese(text).then(|| romanize(text, table));
    let sanitized = match &romanized {
        Some(r) => sanitize(&r.romaji),
        None => sanitize(text),
    };
    Stages {
        romanized,
        slug: truncate_slug(&sanitized, max_length),
        sanitized,
    }
}
