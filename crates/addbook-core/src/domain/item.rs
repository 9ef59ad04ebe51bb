//! Edition metadata and the bibliography item built from it

use super::{first_non_empty, AuthorRef, Creator};
use serde::{Deserialize, Serialize};

/// Full metadata for a single edition, looked up by ISBN
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EditionMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(default)]
    pub isbn_13: Vec<String>,
    #[serde(default)]
    pub isbn_10: Vec<String>,
}

/// A book item ready to hand to a bibliography manager
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookItem {
    pub item_type: String,
    pub title: String,
    pub creators: Vec<Creator>,
    pub date: Option<String>,
    pub publisher: Option<String>,
    pub language: String,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
}

impl BookItem {
    pub fn from_metadata(
        metadata: &EditionMetadata,
        creators: Vec<Creator>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            item_type: "book".to_string(),
            title: metadata.title.clone(),
            creators,
            date: metadata.publish_date.clone(),
            publisher: metadata.publishers.first().cloned(),
            language: language.into(),
            isbn: first_non_empty(&metadata.isbn_13)
                .or_else(|| first_non_empty(&metadata.isbn_10))
                .map(str::to_string),
        }
    }

    /// Author field in BibTeX form: "Last, First and Last, First"
    pub fn author_field(&self) -> String {
        self.creators
            .iter()
            .map(Creator::to_bibtex_format)
            .collect::<Vec<_>>()
            .join(" and ")
    }
}
