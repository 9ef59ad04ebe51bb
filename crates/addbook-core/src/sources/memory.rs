//! In-memory catalog for tests and offline use

use super::traits::{AuthorNameProvider, EditionProvider, SearchProvider, SourceError};
use crate::domain::{Edition, Work};
use std::collections::HashMap;

/// A fixed catalog held in memory.
///
/// Search returns works whose title contains the query (case-insensitive)
/// in insertion order. Failures can be switched on to exercise the
/// transport-error paths.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    works: Vec<Work>,
    editions: HashMap<String, Vec<Edition>>,
    author_names: HashMap<String, String>,
    fail_search: bool,
    fail_editions: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a work
    pub fn with_work(mut self, work: Work) -> Self {
        self.works.push(work);
        self
    }

    /// Builder method to add editions for a work key
    pub fn with_editions(mut self, work_key: impl Into<String>, editions: Vec<Edition>) -> Self {
        self.editions
            .entry(work_key.into())
            .or_default()
            .extend(editions);
        self
    }

    /// Builder method to register an author name
    pub fn with_author(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.author_names.insert(key.into(), name.into());
        self
    }

    /// Make every search fail
    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Make every edition lookup fail
    pub fn failing_editions(mut self) -> Self {
        self.fail_editions = true;
        self
    }
}

impl SearchProvider for InMemoryCatalog {
    fn search(&self, title: &str, _author: Option<&str>) -> Result<Vec<Work>, SourceError> {
        if self.fail_search {
            return Err(SourceError::Parse("search unavailable".to_string()));
        }
        let needle = title.to_lowercase();
        Ok(self
            .works
            .iter()
            .filter(|w| w.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

impl EditionProvider for InMemoryCatalog {
    fn editions_of(&self, work_key: &str) -> Result<Vec<Edition>, SourceError> {
        if self.fail_editions {
            return Err(SourceError::Parse("editions unavailable".to_string()));
        }
        Ok(self.editions.get(work_key).cloned().unwrap_or_default())
    }
}

impl AuthorNameProvider for InMemoryCatalog {
    fn name_of(&self, author_key: &str) -> Result<Option<String>, SourceError> {
        Ok(self.author_names.get(author_key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_title_substring() {
        let catalog = InMemoryCatalog::new()
            .with_work(Work::new("/works/OL1W", "The Hobbit"))
            .with_work(Work::new("/works/OL2W", "The Silmarillion"));

        let works = catalog.search("hobbit", None).unwrap();
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].key, "/works/OL1W");
    }

    #[test]
    fn test_unknown_work_has_no_editions() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.editions_of("/works/OL9W").unwrap().is_empty());
    }

    #[test]
    fn test_failures() {
        let catalog = InMemoryCatalog::new().failing_search().failing_editions();
        assert!(catalog.search("x", None).is_err());
        assert!(catalog.editions_of("/works/OL1W").is_err());
    }
}
