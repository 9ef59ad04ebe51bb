//! Publication date parsing
//!
//! Catalog dates arrive in whatever shape the cataloguer typed. The parser
//! tries a fixed chain of formats and never fails: anything it cannot read
//! becomes [`SENTINEL_DATE`], which sorts before every real date.

use chrono::NaiveDate;

/// Returned when no format in the chain matches.
pub const SENTINEL_DATE: NaiveDate = NaiveDate::MIN;

/// Parse a free-text publication date, falling back to [`SENTINEL_DATE`].
///
/// Formats are tried in this order, first match wins:
/// 1. `March 3, 1998`
/// 2. `1998-03-03`
/// 3. `1998`
/// 4. `March 1998`
pub fn parse_date(text: &str) -> NaiveDate {
    try_parse_date(text).unwrap_or(SENTINEL_DATE)
}

/// Same chain as [`parse_date`], but reports failure as `None`.
pub fn try_parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_month_day_year(text)
        .or_else(|| parse_iso(text))
        .or_else(|| parse_year_only(text))
        .or_else(|| parse_month_year(text))
}

/// Full English month names; abbreviations are not dates here
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
}

/// Unsigned decimal with a digit count in `min..=max`
fn number(text: &str, min: usize, max: usize) -> Option<u32> {
    if !(min..=max).contains(&text.len()) || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn year(text: &str) -> Option<i32> {
    number(text, 4, 4).map(|y| y as i32)
}

/// `March 3, 1998`
fn parse_month_day_year(text: &str) -> Option<NaiveDate> {
    let (month, rest) = text.split_once(' ')?;
    let (day, year_text) = rest.split_once(", ")?;
    NaiveDate::from_ymd_opt(year(year_text)?, month_number(month)?, number(day, 1, 2)?)
}

/// `1998-03-03`
fn parse_iso(text: &str) -> Option<NaiveDate> {
    let mut parts = text.splitn(3, '-');
    let y = year(parts.next()?)?;
    let m = number(parts.next()?, 1, 2)?;
    let d = number(parts.next()?, 1, 2)?;
    NaiveDate::from_ymd_opt(y, m, d)
}

fn parse_year_only(text: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year(text)?, 1, 1)
}

/// `March 1998`, pinned to the first of the month
fn parse_month_year(text: &str) -> Option<NaiveDate> {
    let (month, year_text) = text.split_once(' ')?;
    NaiveDate::from_ymd_opt(year(year_text)?, month_number(month)?, 1)
}
