//! Common traits for catalog sources

#[cfg(feature = "native")]
use crate::http::HttpError;
use crate::domain::{Edition, Work};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[cfg(feature = "native")]
    #[error("HTTP error: {0}")]
    Http(HttpError),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Rate limited")]
    RateLimit,
    #[error("Not found")]
    NotFound,
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

#[cfg(feature = "native")]
impl From<HttpError> for SourceError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RateLimited => SourceError::RateLimit,
            other => SourceError::Http(other),
        }
    }
}

/// Finds candidate works for a title query, most relevant first
pub trait SearchProvider {
    fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Work>, SourceError>;
}

/// Lists every known edition of a work
pub trait EditionProvider {
    fn editions_of(&self, work_key: &str) -> Result<Vec<Edition>, SourceError>;
}

/// Looks up an author's display name; `Ok(None)` when the record has none
pub trait AuthorNameProvider {
    fn name_of(&self, author_key: &str) -> Result<Option<String>, SourceError>;
}
