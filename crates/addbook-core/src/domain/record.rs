//! Bibliographic record

use super::BookItem;
use serde::{Deserialize, Serialize};

/// Resolved metadata for one edition, the input to citation key derivation
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BibliographicRecord {
    /// One or more names joined by `" and "`
    pub author: String,
    pub title: String,
    /// Explicit year, takes precedence over `publication_date`
    pub year: Option<String>,
    /// Free-text publication date
    pub publication_date: Option<String>,
}

impl BibliographicRecord {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            year: None,
            publication_date: None,
        }
    }

    /// Builder method to set an explicit year
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Builder method to set the free-text publication date
    pub fn with_publication_date(mut self, date: impl Into<String>) -> Self {
        self.publication_date = Some(date.into());
        self
    }

    /// Build the record from a book item; the year comes from its date.
    pub fn from_item(item: &BookItem) -> Self {
        Self {
            author: item.author_field(),
            title: item.title.clone(),
            year: None,
            publication_date: item.date.clone(),
        }
    }
}
