//! Markdown literature notes

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use addbook_core::cite_key::strip_braces;
use addbook_core::{resolve_year, BibliographicRecord};
use chrono::NaiveDate;

/// Language codes with a known full name
const LANGUAGE_NAMES: [(&str, &[&str]); 2] = [
    ("english", &["eng", "en"]),
    ("danish", &["dan", "da"]),
];

/// User-supplied fields for the note front matter
#[derive(Debug, Clone, Default)]
pub struct NoteOptions {
    pub language: String,
    /// Fiction or non-fiction, free text
    pub kind: String,
    pub genre: String,
    pub notes: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum NoteOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Expand a language code to its full name, lowercased
pub fn full_length_language(language: &str) -> String {
    LANGUAGE_NAMES
        .iter()
        .find(|(_, codes)| codes.contains(&language))
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| language.to_string())
        .to_lowercase()
}

/// Render the note body; the year follows the citation key's year rules
pub fn render_note(
    record: &BibliographicRecord,
    options: &NoteOptions,
    today: NaiveDate,
) -> String {
    let title = strip_braces(&record.title);
    let author = strip_braces(&record.author);
    let year = resolve_year(record).unwrap_or_default();
    let language = full_length_language(&options.language);
    let today = today.format("%Y-%m-%d");

    format!(
        "---
title: {title}
author: {author}
year: {year}
type: {kind}
genre: {genre}
language: {language}
completion_date: {today}
date: {today}
completed: True
tags: source/book
---
# {title}
*by {author}*

## My Notes
{notes}

",
        kind = options.kind,
        genre = options.genre,
        notes = options.notes,
    )
}

/// File name for a note: `@{key}.md`, with path separators mapped to `-`
pub fn note_file_name(key: &str) -> String {
    format!("@{}.md", key.replace(['/', '\\'], "-"))
}

/// Write the note unless one with the same key already exists
pub fn write_note(dir: &Path, key: &str, content: &str) -> io::Result<NoteOutcome> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(note_file_name(key));

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(NoteOutcome::AlreadyExists(path));
        }
        Err(e) => return Err(e),
    };
    file.write_all(content.as_bytes())?;

    Ok(NoteOutcome::Created(path))
}
