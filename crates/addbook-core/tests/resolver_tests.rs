//! Edition resolution integration tests, driven through the in-memory catalog

use addbook_core::resolver::rank_key;
use addbook_core::{
    resolve, Edition, InMemoryCatalog, LanguageRef, NotFound, Work, ALLOWED_FORMATS,
    DEFAULT_LANGUAGE,
};
use proptest::prelude::*;
use rstest::rstest;

fn lang(code: &str) -> LanguageRef {
    LanguageRef::reference(format!("/languages/{}", code))
}

fn english(format: &str, date: &str, isbn: &str) -> Edition {
    Edition::new()
        .with_format(format)
        .with_language(lang("eng"))
        .with_date(date)
        .with_isbn_13(isbn)
}

fn single_work(editions: Vec<Edition>) -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_work(Work::new("/works/OL45804W", "Fantastic Mr Fox").with_language("eng"))
        .with_editions("/works/OL45804W", editions)
}

#[test]
fn test_ebook_dropped_and_allow_list_order_applied() {
    let catalog = single_work(vec![
        Edition::new()
            .with_format("ebook")
            .with_language(lang("eng"))
            .with_isbn_13("111"),
        english("paperback", "2001-01-01", "222"),
        english("hardback", "1999", "333"),
    ]);

    let isbn = resolve(&catalog, &catalog, "Fantastic Mr Fox", None, DEFAULT_LANGUAGE);
    assert_eq!(isbn, Ok("222".to_string()));
}

#[test]
fn test_same_format_earliest_edition_wins() {
    let catalog = single_work(vec![
        english("Hardcover", "June 1988", "late"),
        english("hardcover", "October 12, 1970", "first"),
        english("HARDCOVER", "1975", "middle"),
    ]);

    let isbn = resolve(&catalog, &catalog, "Fantastic Mr Fox", None, "eng");
    assert_eq!(isbn, Ok("first".to_string()));
}

#[test]
fn test_unparseable_date_ranks_first_within_format() {
    let catalog = single_work(vec![
        english("paperback", "1970", "dated"),
        english("paperback", "[197-?]", "undated"),
    ]);

    let isbn = resolve(&catalog, &catalog, "Fantastic Mr Fox", None, "eng");
    assert_eq!(isbn, Ok("undated".to_string()));
}

#[test]
fn test_no_work_in_language_is_not_found() {
    let mut catalog = InMemoryCatalog::new();
    for i in 0..5 {
        let key = format!("/works/OL{}W", i);
        catalog = catalog
            .with_work(Work::new(key.clone(), "Fantastic Mr Fox").with_language("ger"))
            .with_editions(key, vec![english("paperback", "1970", "123")]);
    }

    assert_eq!(
        resolve(&catalog, &catalog, "Fantastic Mr Fox", None, "eng"),
        Err(NotFound::NoWorkInLanguage {
            language: "eng".to_string()
        })
    );
}

#[test]
fn test_work_without_languages_is_skipped() {
    let catalog = InMemoryCatalog::new()
        .with_work(Work::new("/works/OL1W", "Matilda"))
        .with_work(Work::new("/works/OL2W", "Matilda").with_language("eng"))
        .with_editions("/works/OL1W", vec![english("paperback", "1988", "wrong")])
        .with_editions("/works/OL2W", vec![english("paperback", "1988", "right")]);

    assert_eq!(
        resolve(&catalog, &catalog, "Matilda", Some("Dahl"), "eng"),
        Ok("right".to_string())
    );
}

#[test]
fn test_plain_language_codes_are_accepted() {
    let catalog = single_work(vec![Edition::new()
        .with_format("book")
        .with_language(LanguageRef::Code("eng".to_string()))
        .with_isbn_10("0140328726")]);

    assert_eq!(
        resolve(&catalog, &catalog, "Fantastic Mr Fox", None, "eng"),
        Ok("0140328726".to_string())
    );
}

#[test]
fn test_nothing_matches_query() {
    let catalog = single_work(vec![english("paperback", "1970", "123")]);
    assert_eq!(
        resolve(&catalog, &catalog, "The BFG", None, "eng"),
        Err(NotFound::NoWorks)
    );
}

#[test]
fn test_other_language_target() {
    let catalog = InMemoryCatalog::new()
        .with_work(
            Work::new("/works/OL7W", "Kaptajn Sabeltand")
                .with_language("dan")
                .with_language("eng"),
        )
        .with_editions(
            "/works/OL7W",
            vec![
                english("paperback", "1990", "english"),
                Edition::new()
                    .with_format("Paperback")
                    .with_language(lang("dan"))
                    .with_date("1991")
                    .with_isbn_13("danish"),
            ],
        );

    assert_eq!(
        resolve(&catalog, &catalog, "Kaptajn", None, "dan"),
        Ok("danish".to_string())
    );
}

#[rstest]
#[case("paperback", 0)]
#[case("Hardback", 1)]
#[case("hardcover", 2)]
#[case("Softback", 3)]
#[case("Perfect Paperback", 4)]
#[case("book", 5)]
#[case("", 6)]
fn test_format_positions(#[case] format: &str, #[case] rank: usize) {
    let edition = Edition::new().with_format(format);
    assert_eq!(rank_key(&edition).map(|(r, _)| r), Some(rank));
    assert_eq!(ALLOWED_FORMATS[rank], format.to_lowercase());
}

fn arb_edition() -> impl Strategy<Value = Edition> {
    let format = prop::sample::select(ALLOWED_FORMATS.to_vec());
    let date = prop_oneof![
        (1500i32..2030).prop_map(|y| y.to_string()),
        (1500i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        Just("unknown".to_string()),
    ];
    (format, date).prop_map(|(format, date)| Edition::new().with_format(format).with_date(date))
}

proptest! {
    #[test]
    fn prop_rank_is_total_order(a in arb_edition(), b in arb_edition()) {
        let ka = rank_key(&a).unwrap();
        let kb = rank_key(&b).unwrap();
        let exactly_one = (ka < kb) as u8 + (kb < ka) as u8 + (ka == kb) as u8;
        prop_assert_eq!(exactly_one, 1);
    }

    #[test]
    fn prop_resolution_is_deterministic(editions in prop::collection::vec(arb_edition(), 0..8)) {
        let editions: Vec<Edition> = editions
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.with_language(lang("eng")).with_isbn_13(i.to_string()))
            .collect();
        let catalog = single_work(editions);

        let first = resolve(&catalog, &catalog, "Fantastic", None, "eng");
        let second = resolve(&catalog, &catalog, "Fantastic", None, "eng");
        prop_assert_eq!(first, second);
    }
}
