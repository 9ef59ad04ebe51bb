//! Open Library source plugin
//!
//! API docs: https://openlibrary.org/developers/api
//! Endpoints used: `/search.json`, `{work}/editions.json`,
//! `/isbn/{isbn}.json`, `{author}.json`

use super::traits::SourceError;
use crate::domain::{Edition, EditionMetadata, Work};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    key: Option<String>,
    title: Option<String>,
    #[serde(default)]
    language: Vec<String>,
    #[serde(default)]
    isbn: Vec<String>,
    #[serde(default)]
    isbn_10: Vec<String>,
    #[serde(default)]
    isbn_13: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EditionsResponse {
    #[serde(default)]
    entries: Vec<Edition>,
}

#[derive(Debug, Deserialize)]
struct AuthorResponse {
    name: Option<String>,
}

pub struct OpenLibrarySource;

impl OpenLibrarySource {
    pub const BASE_URL: &'static str = "https://openlibrary.org";

    /// Parse `/search.json`; docs without a key are dropped
    pub fn parse_search_response(json: &str) -> Result<Vec<Work>, SourceError> {
        let response: SearchResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid Open Library search JSON: {}", e)))?;

        Ok(response
            .docs
            .into_iter()
            .filter_map(|doc| {
                Some(Work {
                    key: doc.key.filter(|k| !k.is_empty())?,
                    title: doc.title.unwrap_or_default(),
                    languages: doc.language,
                    isbn: doc.isbn,
                    isbn_10: doc.isbn_10,
                    isbn_13: doc.isbn_13,
                })
            })
            .collect())
    }

    /// Parse `{work}/editions.json`
    pub fn parse_editions_response(json: &str) -> Result<Vec<Edition>, SourceError> {
        let response: EditionsResponse = serde_json::from_str(json).map_err(|e| {
            SourceError::Parse(format!("Invalid Open Library editions JSON: {}", e))
        })?;
        Ok(response.entries)
    }

    /// Parse `/isbn/{isbn}.json`
    pub fn parse_edition_metadata(json: &str) -> Result<EditionMetadata, SourceError> {
        serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid Open Library edition JSON: {}", e)))
    }

    /// Parse `{author}.json`, returning the display name if it has one
    pub fn parse_author_response(json: &str) -> Result<Option<String>, SourceError> {
        let response: AuthorResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Invalid Open Library author JSON: {}", e)))?;
        Ok(response.name.filter(|n| !n.trim().is_empty()))
    }
}

#[cfg(feature = "native")]
pub use client::OpenLibraryClient;

#[cfg(feature = "native")]
mod client {
    use super::OpenLibrarySource;
    use crate::domain::{Edition, EditionMetadata, Work};
    use crate::http::{HttpClient, HttpError, HttpResponse, DEFAULT_USER_AGENT};
    use crate::sources::traits::{
        AuthorNameProvider, EditionProvider, SearchProvider, SourceError,
    };

    /// Open Library over blocking HTTP
    pub struct OpenLibraryClient {
        http: HttpClient,
        base_url: String,
    }

    impl OpenLibraryClient {
        pub fn new(base_url: &str, user_agent: &str) -> Result<Self, SourceError> {
            Ok(Self {
                http: HttpClient::new(user_agent)?,
                base_url: base_url.trim_end_matches('/').to_string(),
            })
        }

        pub fn with_defaults() -> Result<Self, SourceError> {
            Self::new(OpenLibrarySource::BASE_URL, DEFAULT_USER_AGENT)
        }

        /// Full metadata for the edition carrying `isbn`
        pub fn fetch_edition_metadata(&self, isbn: &str) -> Result<EditionMetadata, SourceError> {
            let url = format!("{}/isbn/{}.json", self.base_url, isbn);
            let body = self.fetch(&url)?;
            OpenLibrarySource::parse_edition_metadata(&body)
        }

        fn path_url(&self, key: &str, suffix: &str) -> String {
            if key.starts_with('/') {
                format!("{}{}{}", self.base_url, key, suffix)
            } else {
                format!("{}/{}{}", self.base_url, key, suffix)
            }
        }

        fn fetch(&self, url: &str) -> Result<String, SourceError> {
            let response = self.http.get(url)?;
            Self::body(response)
        }

        fn body(response: HttpResponse) -> Result<String, SourceError> {
            if response.is_success() {
                return Ok(response.body);
            }
            match response.status {
                404 => Err(SourceError::NotFound),
                status => Err(SourceError::Http(HttpError::RequestFailed {
                    message: format!("HTTP {}", status),
                })),
            }
        }
    }

    impl SearchProvider for OpenLibraryClient {
        fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Work>, SourceError> {
            if title.trim().is_empty() {
                return Err(SourceError::InvalidQuery("empty title".to_string()));
            }

            let mut params = vec![("title", title)];
            if let Some(author) = author {
                params.push(("author", author));
            }

            let url = format!("{}/search.json", self.base_url);
            let response = self.http.get_with_params(&url, &params)?;
            OpenLibrarySource::parse_search_response(&Self::body(response)?)
        }
    }

    impl EditionProvider for OpenLibraryClient {
        fn editions_of(&self, work_key: &str) -> Result<Vec<Edition>, SourceError> {
            let body = self.fetch(&self.path_url(work_key, "/editions.json"))?;
            OpenLibrarySource::parse_editions_response(&body)
        }
    }

    impl AuthorNameProvider for OpenLibraryClient {
        fn name_of(&self, author_key: &str) -> Result<Option<String>, SourceError> {
            let body = self.fetch(&self.path_url(author_key, ".json"))?;
            OpenLibrarySource::parse_author_response(&body)
        }
    }
}
