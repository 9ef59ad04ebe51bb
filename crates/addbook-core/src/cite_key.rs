//! Citation key derivation
//!
//! A key is `surname + ShortTitle + year`, e.g. `doeTheGreatEscape1998`.
//! Existing notes are named after their keys, so the rules here are fixed:
//! the surname is whatever precedes the first comma of the first author,
//! even when the name was given as "First Last".

use crate::date::try_parse_date;
use crate::domain::BibliographicRecord;
use chrono::Datelike;

/// Number of title words carried into the key
const TITLE_WORDS: usize = 3;

/// Derive the citation key for a record. Pure and total.
pub fn derive_key(record: &BibliographicRecord) -> String {
    let author = strip_braces(&record.author);
    let title = strip_braces(&record.title);
    let year = resolve_year(record).unwrap_or_default();

    format!("{}{}{}", first_author_surname(&author), short_title(&title), year)
}

/// Explicit year if present, otherwise the year of the parsed publication date.
pub fn resolve_year(record: &BibliographicRecord) -> Option<String> {
    if let Some(year) = record.year.as_deref().map(str::trim) {
        if !year.is_empty() {
            return Some(year.to_string());
        }
    }

    record
        .publication_date
        .as_deref()
        .and_then(try_parse_date)
        .map(|date| date.year().to_string())
}

/// Remove `{` and `}` left over from BibTeX escaping
pub fn strip_braces(s: &str) -> String {
    s.replace(['{', '}'], "")
}

fn first_author_surname(author: &str) -> String {
    let first_author = author.split(" and ").next().unwrap_or("");
    first_author
        .split(',')
        .next()
        .unwrap_or(first_author)
        .to_lowercase()
}

fn short_title(title: &str) -> String {
    title
        .split_whitespace()
        .take(TITLE_WORDS)
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
