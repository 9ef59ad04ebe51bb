//! addbook-core: edition resolution and citation keys for book notes
//!
//! This library provides pure Rust implementations of:
//! - Edition resolution (title/author query to a single ISBN)
//! - Free-text publication date parsing with a fallback chain
//! - Deterministic citation key derivation
//! - Author reference de-duplication and name parsing
//! - Open Library response parsing (and an HTTP client behind `native`)
//!
//! Catalog access goes through the provider traits in [`sources`], so the
//! resolver never depends on a concrete transport.

pub mod authors;
pub mod cite_key;
pub mod date;
pub mod domain;
#[cfg(feature = "native")]
pub mod http;
pub mod resolver;
pub mod sources;

pub use authors::{dedup_author_refs, normalize_authors, parse_creator};
pub use cite_key::{derive_key, resolve_year};
pub use date::{parse_date, try_parse_date, SENTINEL_DATE};
pub use domain::{
    AuthorRef, BibliographicRecord, BookItem, Creator, Edition, EditionMetadata, LanguageRef,
    Work,
};
pub use resolver::{resolve, NotFound, ALLOWED_FORMATS, DEFAULT_LANGUAGE};
pub use sources::{
    AuthorNameProvider, EditionProvider, InMemoryCatalog, OpenLibrarySource, SearchProvider,
    SourceError,
};
#[cfg(feature = "native")]
pub use sources::OpenLibraryClient;
