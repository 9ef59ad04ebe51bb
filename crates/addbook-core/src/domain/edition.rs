//! Edition representation

use super::first_non_empty;
use serde::{Deserialize, Serialize};

/// A declared edition language.
///
/// Catalogs give either a bare code (`"eng"`) or a reference object
/// (`{"key": "/languages/eng"}`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LanguageRef {
    Code(String),
    Reference { key: String },
}

impl LanguageRef {
    pub fn reference(key: impl Into<String>) -> Self {
        LanguageRef::Reference { key: key.into() }
    }

    /// The language code: last path segment of the reference key.
    pub fn code(&self) -> &str {
        let raw = match self {
            LanguageRef::Code(code) => code.as_str(),
            LanguageRef::Reference { key } => key.as_str(),
        };
        raw.rsplit('/').next().unwrap_or(raw)
    }
}

/// A specific printing of a Work
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Edition {
    /// Free-text physical format (`Paperback`, `Hardcover`, `Audio CD`, ...)
    #[serde(default)]
    pub physical_format: Option<String>,
    #[serde(default)]
    pub languages: Vec<LanguageRef>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
    #[serde(default)]
    pub isbn_10: Vec<String>,
}

impl Edition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the physical format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.physical_format = Some(format.into());
        self
    }

    /// Builder method to add a declared language
    pub fn with_language(mut self, language: LanguageRef) -> Self {
        self.languages.push(language);
        self
    }

    /// Builder method to set the publication date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.publish_date = Some(date.into());
        self
    }

    /// Builder method to add an ISBN-13
    pub fn with_isbn_13(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_13.push(isbn.into());
        self
    }

    /// Builder method to add an ISBN-10
    pub fn with_isbn_10(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_10.push(isbn.into());
        self
    }

    /// Lowercased physical format, empty when absent.
    pub fn format_key(&self) -> String {
        self.physical_format
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
    }

    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(LanguageRef::code)
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.language_codes().any(|c| c == code)
    }

    /// First ISBN-13, else first ISBN-10.
    pub fn preferred_isbn(&self) -> Option<&str> {
        first_non_empty(&self.isbn_13).or_else(|| first_non_empty(&self.isbn_10))
    }
}
