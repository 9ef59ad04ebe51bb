//! Author reference de-duplication and name parsing

use crate::domain::{AuthorRef, Creator};
use crate::sources::AuthorNameProvider;
use std::collections::BTreeMap;

/// Drop structurally equal references.
///
/// The result is ordered by canonical form, so it does not depend on the
/// order the catalog listed the references in.
pub fn dedup_author_refs(refs: &[AuthorRef]) -> Vec<AuthorRef> {
    let unique: BTreeMap<String, &AuthorRef> = refs.iter().map(|r| (r.canonical(), r)).collect();
    unique.into_values().cloned().collect()
}

/// Parse a display name into a creator.
///
/// - "Last, First" splits on the first comma
/// - a single word is the surname
/// - otherwise the last word is the surname and the rest the given name
pub fn parse_creator(name: &str) -> Creator {
    let name = name.trim();

    if let Some((last, first)) = name.split_once(',') {
        return Creator::author(first.trim(), last.trim());
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, [])) => Creator::author("", *last),
        Some((last, given)) => Creator::author(given.join(" "), *last),
        None => Creator::author("", ""),
    }
}

/// De-duplicate references, look up each display name, and parse it.
///
/// References without a key, and keys the provider cannot name, are skipped.
pub fn normalize_authors<P>(refs: &[AuthorRef], provider: &P) -> Vec<Creator>
where
    P: AuthorNameProvider + ?Sized,
{
    dedup_author_refs(refs)
        .iter()
        .filter_map(|author| {
            let key = author.key()?;
            match provider.name_of(key) {
                Ok(Some(name)) if !name.trim().is_empty() => Some(name),
                Ok(_) => {
                    tracing::debug!("No display name for author {}", key);
                    None
                }
                Err(e) => {
                    tracing::warn!("Author lookup failed for {}: {}", key, e);
                    None
                }
            }
        })
        .map(|name| parse_creator(&name))
        .collect()
}
