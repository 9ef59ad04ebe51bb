//! Edition resolution
//!
//! Turns a title (and optional author) into the ISBN of one printed edition:
//! search works, keep the first work in the target language, fetch its
//! editions, keep physical editions in the target language, rank them by
//! format preference and age, and take the first ISBN found.
//!
//! Provider failures are logged and treated as empty results, so resolution
//! always ends in an ISBN or a [`NotFound`] reason.

pub mod ranking;

pub use ranking::{format_rank, rank_editions, rank_key, ALLOWED_FORMATS};

use crate::domain::{Edition, Work};
use crate::sources::{EditionProvider, SearchProvider};
use thiserror::Error;

/// Language used when the caller does not ask for one
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Why no ISBN could be resolved
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("no works matched the query")]
    NoWorks,
    #[error("no works found in language '{language}'")]
    NoWorkInLanguage { language: String },
    #[error("work {work_key} has no editions")]
    NoEditions { work_key: String },
    #[error("work {work_key} has no physical editions")]
    NoPhysicalEditions { work_key: String },
    #[error("work {work_key} has no physical editions in language '{language}'")]
    NoEditionInLanguage { work_key: String, language: String },
    #[error("no ISBN on any edition of work {work_key}")]
    NoIsbn { work_key: String },
}

/// Resolve a title (and optional author) to the ISBN of the best edition.
pub fn resolve<S, E>(
    search: &S,
    editions: &E,
    title: &str,
    author: Option<&str>,
    language: &str,
) -> Result<String, NotFound>
where
    S: SearchProvider + ?Sized,
    E: EditionProvider + ?Sized,
{
    let works = search.search(title, author).unwrap_or_else(|e| {
        tracing::warn!("Search failed for '{}': {}", title, e);
        Vec::new()
    });
    if works.is_empty() {
        return Err(NotFound::NoWorks);
    }
    tracing::debug!("{} candidate works for '{}'", works.len(), title);

    let work = select_work(works, language).ok_or_else(|| NotFound::NoWorkInLanguage {
        language: language.to_string(),
    })?;
    tracing::debug!("Selected work {} ({})", work.key, work.title);

    let all_editions = editions.editions_of(&work.key).unwrap_or_else(|e| {
        tracing::warn!("Edition lookup failed for {}: {}", work.key, e);
        Vec::new()
    });
    if all_editions.is_empty() {
        return Err(NotFound::NoEditions { work_key: work.key });
    }

    let physical = physical_editions(all_editions);
    if physical.is_empty() {
        return Err(NotFound::NoPhysicalEditions { work_key: work.key });
    }

    let in_language = editions_in_language(physical, language);
    if in_language.is_empty() {
        return Err(NotFound::NoEditionInLanguage {
            work_key: work.key,
            language: language.to_string(),
        });
    }
    tracing::debug!("{} ranked editions for {}", in_language.len(), work.key);

    let ranked = rank_editions(in_language);
    pick_isbn(&ranked, &work)
        .map(str::to_string)
        .ok_or(NotFound::NoIsbn { work_key: work.key })
}

/// First work, in provider order, that declares `language`.
fn select_work(works: Vec<Work>, language: &str) -> Option<Work> {
    works.into_iter().find(|w| w.has_language(language))
}

fn physical_editions(editions: Vec<Edition>) -> Vec<Edition> {
    editions
        .into_iter()
        .filter(|e| format_rank(e).is_some())
        .collect()
}

fn editions_in_language(editions: Vec<Edition>, language: &str) -> Vec<Edition> {
    editions
        .into_iter()
        .filter(|e| e.has_language(language))
        .collect()
}

/// First edition ISBN in rank order, else the work-level fallback.
fn pick_isbn<'a>(ranked: &'a [Edition], work: &'a Work) -> Option<&'a str> {
    ranked
        .iter()
        .find_map(Edition::preferred_isbn)
        .or_else(|| work.fallback_isbn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LanguageRef;
    use crate::sources::InMemoryCatalog;

    fn eng() -> LanguageRef {
        LanguageRef::reference("/languages/eng")
    }

    fn dune_catalog(editions: Vec<Edition>) -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_work(Work::new("/works/OL1W", "Dune").with_language("eng"))
            .with_editions("/works/OL1W", editions)
    }

    #[test]
    fn test_allow_list_position_beats_date() {
        let catalog = dune_catalog(vec![
            Edition::new().with_format("ebook").with_language(eng()).with_isbn_13("111"),
            Edition::new()
                .with_format("paperback")
                .with_language(eng())
                .with_date("2001-01-01")
                .with_isbn_13("222"),
            Edition::new()
                .with_format("hardback")
                .with_language(eng())
                .with_date("1999")
                .with_isbn_13("333"),
        ]);

        // paperback sits before hardback in the allow-list, so the later
        // paperback still outranks the 1999 hardback
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Ok("222".to_string())
        );
    }

    #[test]
    fn test_skips_editions_without_isbn() {
        let catalog = dune_catalog(vec![
            Edition::new().with_format("paperback").with_language(eng()),
            Edition::new()
                .with_format("hardcover")
                .with_language(eng())
                .with_isbn_10("0441172717"),
        ]);
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Ok("0441172717".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_work_isbn() {
        let catalog = InMemoryCatalog::new()
            .with_work(
                Work::new("/works/OL1W", "Dune")
                    .with_language("eng")
                    .with_isbn_13("9780441013593"),
            )
            .with_editions(
                "/works/OL1W",
                vec![Edition::new().with_format("book").with_language(eng())],
            );
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Ok("9780441013593".to_string())
        );
    }

    #[test]
    fn test_no_isbn_anywhere() {
        let catalog = dune_catalog(vec![Edition::new().with_language(eng())]);
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoIsbn {
                work_key: "/works/OL1W".to_string()
            })
        );
    }

    #[test]
    fn test_only_digital_editions() {
        let catalog = dune_catalog(vec![
            Edition::new().with_format("Audio CD").with_language(eng()).with_isbn_13("1"),
            Edition::new().with_format("ebook").with_language(eng()).with_isbn_13("2"),
        ]);
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoPhysicalEditions {
                work_key: "/works/OL1W".to_string()
            })
        );
    }

    #[test]
    fn test_no_edition_in_language() {
        let catalog = dune_catalog(vec![Edition::new()
            .with_format("paperback")
            .with_language(LanguageRef::reference("/languages/fre"))
            .with_isbn_13("1")]);
        assert!(matches!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoEditionInLanguage { .. })
        ));
    }

    #[test]
    fn test_first_work_in_language_is_used() {
        let catalog = InMemoryCatalog::new()
            .with_work(Work::new("/works/OL1W", "Dune").with_language("fre"))
            .with_work(Work::new("/works/OL2W", "Dune").with_language("eng"))
            .with_work(Work::new("/works/OL3W", "Dune").with_language("eng"))
            .with_editions(
                "/works/OL1W",
                vec![Edition::new().with_language(eng()).with_isbn_13("one")],
            )
            .with_editions(
                "/works/OL2W",
                vec![Edition::new().with_language(eng()).with_isbn_13("two")],
            )
            .with_editions(
                "/works/OL3W",
                vec![Edition::new().with_language(eng()).with_isbn_13("three")],
            );
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Ok("two".to_string())
        );
    }

    #[test]
    fn test_provider_failures_are_not_found() {
        let catalog = dune_catalog(vec![]).failing_search();
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoWorks)
        );

        let catalog = dune_catalog(vec![Edition::new().with_language(eng()).with_isbn_13("1")])
            .failing_editions();
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoEditions {
                work_key: "/works/OL1W".to_string()
            })
        );
    }

    #[test]
    fn test_work_without_editions() {
        let catalog = dune_catalog(vec![]);
        assert_eq!(
            resolve(&catalog, &catalog, "Dune", None, "eng"),
            Err(NotFound::NoEditions {
                work_key: "/works/OL1W".to_string()
            })
        );
    }
}
