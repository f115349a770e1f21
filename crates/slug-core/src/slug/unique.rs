use tracing::debug;

use crate::sanitize::truncate_slug;
use crate::settings::settings;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UniqueSlugError {
    #[error("cannot derive a unique slug from an empty slug")]
    EmptyBase,
    #[error("no free slug for {base:?} after {attempts} attempts")]
    Exhausted { base: String, attempts: u32 },
    #[error("suffix for {base:?} does not fit in {max_length} bytes")]
    NoRoomForSuffix { base: String, max_length: usize },
}

/// Return `base` if it is free, else the first free `base-N`, using the
/// suffix range and `slug.max_length` from the global settings.
pub fn unique_slug(
    base: &str,
    is_taken: impl FnMut(&str) -> bool,
) -> Result<String, UniqueSlugError> {
    let s = settings();
    unique_slug_with(
        base,
        s.unique.first_suffix,
        s.unique.max_attempts,
        s.slug.max_length,
        is_taken,
    )
}

/// Like `unique_slug` with an explicit suffix range: `base-first_suffix`
/// through `max_attempts` consecutive numbers are tried. With a non-zero
/// `max_length`, `base` is shortened so that `base-N` stays within the limit.
pub fn unique_slug_with(
    base: &str,
    first_suffix: u32,
    max_attempts: u32,
    max_length: usize,
    mut is_taken: impl FnMut(&str) -> bool,
) -> Result<String, UniqueSlugError> {
    if base.is_empty() {
        return Err(UniqueSlugError::EmptyBase);
    }
    if !is_taken(base) {
        return Ok(base.to_string());
    }

    for n in (0..u64::from(max_attempts)).map(|k| u64::from(first_suffix) + k) {
        let suffix = format!("-{n}");
        let stem = if max_length == 0 {
            base.to_string()
        } else {
            truncate_slug(base, max_length.saturating_sub(suffix.len()))
        };
        if stem.is_empty() || (max_length > 0 && suffix.len() >= max_length) {
            return Err(UniqueSlugError::NoRoomForSuffix {
                base: base.to_string(),
                max_length,
            });
        }
        let candidate = format!("{stem}{suffix}");
        if !is_taken(&candidate) {
            debug!(base, suffix = n, "slug taken, using suffix");
            return Ok(candidate);
        }
    }

    Err(UniqueSlugError::Exhausted {
        base: base.to_string(),
        attempts: max_attempts,
    })
}
