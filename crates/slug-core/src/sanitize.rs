//! Final slug sanitization: lowercase ASCII words joined by single hyphens.

/// Lowercase `text`, keep only `[a-z0-9]`, whitespace and `-`, then turn each
/// run of whitespace/hyphens into one hyphen and strip hyphens at both ends.
///
/// Whitespace follows the ECMAScript `\s` class, so the ideographic space
/// (U+3000) common in Japanese titles separates words like an ASCII space does.
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !result.is_empty() {
                result.push('-');
            }
            pending_hyphen = false;
            result.push(c);
        } else if c == '-' || is_separator_space(c) {
            pending_hyphen = true;
        }
    }

    result
}

/// ECMAScript `\s`: Unicode `White_Space` plus the BOM (U+FEFF), minus NEL
/// (U+0085).
fn is_separator_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Shorten `slug` to at most `max_len` bytes, cutting at the last word
/// boundary when one exists and never inside a multi-byte character.
/// `max_len == 0` disables the limit.
pub fn truncate_slug(slug: &str, max_len: usize) -> String {
    if max_len == 0 || slug.len() <= max_len {
        return slug.to_string();
    }
    let mut end = max_len;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    let cut = if slug[end..].starts_with('-') {
        head
    } else {
        match head.rfind('-') {
            Some(pos) => &head[..pos],
            None => head,
        }
    };
    cut.trim_end_matches('-').to_string()
}
