use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use slug_core::slug::{explain_slug, generate_slug, unique_slug, SlugExplanation, UniqueSlugError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// One converted title in a batch run.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BatchEntry {
    pub title: String,
    pub slug: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Unique {
        line: usize,
        source: UniqueSlugError,
    },
}

pub fn generate_cmd(texts: &[String]) {
    if let [text] = texts {
        println!("{}", generate_slug(text));
        return;
    }
    let rows: Vec<(&str, String)> = texts
        .iter()
        .map(|t| (t.as_str(), generate_slug(t)))
        .collect();
    print!("{}", format_table(&rows));
}

pub fn explain_cmd(text: &str, json: bool) {
    let ex = explain_slug(text);
    if json {
        let out = die!(serde_json::to_string_pretty(&ex), "Error serializing: {}");
        println!("{out}");
    } else {
        print!("{}", format_explanation(&ex));
    }
}

pub fn batch_cmd(input_file: &str, output_file: &str, unique: bool) {
    let file = die!(
        fs::File::open(input_file),
        "Failed to open input file {input_file}: {}"
    );
    let entries = die!(slugify_lines(BufReader::new(file), unique), "Error: {}");
    let out = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    die!(
        write_jsonl(&entries, BufWriter::new(out)),
        "Error writing {output_file}: {}"
    );
    eprintln!("{} titles → {output_file}", entries.len());
}

/// Slugify one title per line. Blank lines are skipped. With `unique`, slugs
/// repeated within the batch get numeric suffixes; empty slugs are left as is.
pub fn slugify_lines(input: impl BufRead, unique: bool) -> Result<Vec<BatchEntry>, BatchError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        let mut slug = generate_slug(title);
        if unique && !slug.is_empty() {
            slug = unique_slug(&slug, |s| seen.contains(s)).map_err(|source| {
                BatchError::Unique {
                    line: idx + 1,
                    source,
                }
            })?;
            seen.insert(slug.clone());
        }
        entries.push(BatchEntry {
            title: title.to_string(),
            slug,
        });
    }

    Ok(entries)
}

pub fn write_jsonl(entries: &[BatchEntry], mut out: impl Write) -> Result<(), BatchError> {
    for entry in entries {
        let line = serde_json::to_string(entry).map_err(io::Error::from)?;
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Two-column `title  slug` listing, padded by terminal display width so
/// full-width Japanese titles line up.
pub fn format_table(rows: &[(&str, String)]) -> String {
    let width = rows
        .iter()
        .map(|(title, _)| UnicodeWidthStr::width(*title))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (title, slug) in rows {
        let pad = width - UnicodeWidthStr::width(*title);
        out.push_str(&format!("{title}{}  {slug}\n", " ".repeat(pad)));
    }
    out
}

/// Format a `SlugExplanation` as human-readable text.
pub fn format_explanation(ex: &SlugExplanation) -> String {
    let mut out = String::new();
    let path = if ex.japanese { "japanese" } else { "ascii" };
    out.push_str(&format!("=== \"{}\" ({path} path) ===\n", ex.input));

    let stages = [
        ("normalized", ex.normalized.as_deref()),
        ("kanji", ex.kanji_resolved.as_deref()),
        ("romaji", ex.romaji.as_deref()),
        ("sanitized", Some(ex.sanitized.as_str())),
        ("slug", Some(ex.slug.as_str())),
    ];
    for (label, value) in stages {
        if let Some(v) = value {
            out.push_str(&format!("  {label:<11}{v}\n"));
        }
    }

    if !ex.unmapped_kanji.is_empty() {
        let dropped: String = ex.unmapped_kanji.iter().collect();
        out.push_str(&format!("  dropped    {dropped}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_slugify_lines_skips_blank() {
        let input = Cursor::new("Hello World\n\n  \nデータ活用術\n");
        let entries = slugify_lines(input, false).unwrap();
        assert_eq!(
            entries,
            vec![
                BatchEntry {
                    title: "Hello World".into(),
                    slug: "hello-world".into()
                },
                BatchEntry {
                    title: "データ活用術".into(),
                    slug: "detakatsuyoujutsu".into()
                },
            ]
        );
    }

    #[test]
    fn test_slugify_lines_unique() {
        let input = Cursor::new("Hello World\nhello world\nHELLO   WORLD\n!!!\n???\n");
        let slugs: Vec<String> = slugify_lines(input, true)
            .unwrap()
            .into_iter()
            .map(|e| e.slug)
            .collect();
        assert_eq!(
            slugs,
            vec!["hello-world", "hello-world-2", "hello-world-3", "", ""]
        );
    }

    #[test]
    fn test_slugify_lines_without_unique_keeps_duplicates() {
        let input = Cursor::new("a\nA\n");
        let slugs: Vec<String> = slugify_lines(input, false)
            .unwrap()
            .into_iter()
            .map(|e| e.slug)
            .collect();
        assert_eq!(slugs, vec!["a", "a"]);
    }

    #[test]
    fn test_write_jsonl() {
        let entries = vec![BatchEntry {
            title: "あい".into(),
            slug: "ai".into(),
        }];
        let mut buf = Vec::new();
        write_jsonl(&entries, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"title\":\"あい\",\"slug\":\"ai\"}\n"
        );
    }

    #[test]
    fn test_batch_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("titles.txt");
        let output = dir.path().join("slugs.jsonl");
        fs::write(&input, "入門講座\nRust入門\n").unwrap();

        batch_cmd(input.to_str().unwrap(), output.to_str().unwrap(), true);

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["slug"], "nyuumonkouza");
        assert_eq!(lines[1]["title"], "Rust入門");
        assert_eq!(lines[1]["slug"], "rustnyuumon");
    }

    #[test]
    fn test_format_table_aligns_by_display_width() {
        let rows = vec![("あい", "ai".to_string()), ("abcdef", "abcdef".to_string())];
        assert_eq!(format_table(&rows), "あい    ai\nabcdef  abcdef\n");
    }

    #[test]
    fn test_format_explanation() {
        let text = format_explanation(&explain_slug("鬱データ"));
        assert!(text.contains("(japanese path)"));
        assert!(text.contains("  normalized 鬱でーた"), "{text}");
        assert!(text.contains("  slug       deta"), "{text}");
        assert!(text.contains("  dropped    鬱"), "{text}");

        let ascii = format_explanation(&explain_slug("Hello"));
        assert!(ascii.contains("(ascii path)"));
        assert!(!ascii.contains("romaji"));
    }
}
