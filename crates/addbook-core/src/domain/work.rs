//! Work representation

use super::first_non_empty;
use serde::{Deserialize, Serialize};

/// A catalog entry for a book, independent of any printing
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Work {
    /// Opaque catalog key, e.g. `/works/OL45804W`
    pub key: String,
    pub title: String,
    /// Declared language codes (`eng`, `dan`, ...)
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub isbn: Vec<String>,
    #[serde(default)]
    pub isbn_10: Vec<String>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
}

impl Work {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builder method to add a declared language
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.languages.push(code.into());
        self
    }

    /// Builder method to add a generic ISBN
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn.push(isbn.into());
        self
    }

    /// Builder method to add an ISBN-10
    pub fn with_isbn_10(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_10.push(isbn.into());
        self
    }

    /// Builder method to add an ISBN-13
    pub fn with_isbn_13(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_13.push(isbn.into());
        self
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }

    /// Work-level ISBN, checked as generic, then ISBN-10, then ISBN-13.
    pub fn fallback_isbn(&self) -> Option<&str> {
        first_non_empty(&self.isbn)
            .or_else(|| first_non_empty(&self.isbn_10))
            .or_else(|| first_non_empty(&self.isbn_13))
    }
}
