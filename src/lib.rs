//! Title-to-slug transliteration for the Chapiko content platform.
//!
//! Thin facade over `slug-core`: re-exports the slug pipeline and owns
//! optional tracing setup for long-running hosts.

mod trace_init;

pub use slug_core::kanji::{KanjiConfigError, KanjiTable};
pub use slug_core::settings;
pub use slug_core::slug::{
    explain_slug, generate_slug, truncate_slug, unique_slug, SlugExplanation, UniqueSlugError,
};
pub use slug_core::unicode;
pub use trace_init::init_tracing;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
