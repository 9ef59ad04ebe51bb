//! Domain types for book resolution
//!
//! - Work: an abstract catalog entry, independent of printing
//! - Edition: one specific printing of a Work
//! - EditionMetadata: full metadata for a resolved edition
//! - AuthorRef / Creator: author references and parsed names
//! - BookItem: the bibliography item built from metadata
//! - BibliographicRecord: the input to citation key derivation

pub mod author;
pub mod edition;
pub mod item;
pub mod record;
pub mod work;

pub use author::*;
pub use edition::*;
pub use item::*;
pub use record::*;
pub use work::*;

/// First entry of a list of identifiers that is not blank.
pub(crate) fn first_non_empty(values: &[String]) -> Option<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
}
