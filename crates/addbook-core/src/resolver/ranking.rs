//! Edition filtering and ranking

use crate::date::parse_date;
use crate::domain::Edition;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Physical formats that count as a printed book, most preferred first.
/// The empty string stands for an edition with no recorded format.
pub const ALLOWED_FORMATS: [&str; 7] = [
    "paperback",
    "hardback",
    "hardcover",
    "softback",
    "perfect paperback",
    "book",
    "",
];

lazy_static! {
    static ref FORMAT_PRIORITY: HashMap<&'static str, usize> = ALLOWED_FORMATS
        .iter()
        .enumerate()
        .map(|(rank, format)| (*format, rank))
        .collect();
}

/// Position of the edition's format in [`ALLOWED_FORMATS`], `None` if excluded.
pub fn format_rank(edition: &Edition) -> Option<usize> {
    FORMAT_PRIORITY.get(edition.format_key().as_str()).copied()
}

/// Sort key: format rank, then publication date (earliest first).
pub fn rank_key(edition: &Edition) -> Option<(usize, NaiveDate)> {
    let rank = format_rank(edition)?;
    let date = parse_date(edition.publish_date.as_deref().unwrap_or(""));
    Some((rank, date))
}

/// Stable-sort editions by [`rank_key`]. Editions with an excluded format
/// are dropped, never ranked last.
pub fn rank_editions(editions: Vec<Edition>) -> Vec<Edition> {
    let mut keyed: Vec<((usize, NaiveDate), Edition)> = editions
        .into_iter()
        .filter_map(|edition| Some((rank_key(&edition)?, edition)))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, edition)| edition).collect()
}
