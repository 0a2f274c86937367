//! Property tests for the list-view transformer.

use std::num::NonZeroUsize;

use proptest::prelude::*;

use libris_model::{EntityKind, Record, Value};
use libris_view::{
    Criteria, FieldKind, FilterSelection, ScreenConfig, SortField, SortKey, derive,
    matches_search, total_pages,
};

const GENRES: [&str; 4] = ["SciFi", "Drama", "Poetry", "History"];

fn config(page_size: usize) -> ScreenConfig {
    ScreenConfig::new(EntityKind::Book)
        .with_search_fields(["title", "genre"])
        .with_sort_field(SortField::new("title", "Title", FieldKind::Text))
        .with_sort_field(SortField::new("year", "Year", FieldKind::Number))
        .with_page_size(NonZeroUsize::new(page_size).unwrap())
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z ]{0,12}",
        prop::sample::select(GENRES.to_vec()),
        prop::option::of(1800i64..2030),
    )
        .prop_map(|(title, genre, year)| {
            Record::new()
                .with("title", title)
                .with("genre", genre)
                .with("year", year)
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..40)
}

/// Records with pairwise distinct years, so sort keys never tie.
fn distinct_years_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::btree_set(0i64..5000, 0..30)
        .prop_map(|years| {
            years
                .into_iter()
                .map(|year| Record::new().with("title", format!("T{year}")).with("year", year))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn owned(records: &[&Record]) -> Vec<Record> {
    records.iter().map(|record| (*record).clone()).collect()
}

proptest! {
    #[test]
    fn empty_query_matches_any_record(record in record_strategy()) {
        prop_assert!(matches_search(&record, &["title", "genre", "missing"], ""));
    }

    #[test]
    fn unfiltered_output_is_the_sorted_collection(records in records_strategy()) {
        let config = config(1000);
        let criteria = Criteria::new().with_sort(Some(SortKey::asc("title")));
        let derived = derive(&records, &config, &criteria);

        let mut expected: Vec<&Record> = records.iter().collect();
        expected.sort_by_key(|record| {
            record.text("title").map(str::to_lowercase).unwrap_or_default()
        });
        prop_assert_eq!(owned(derived.items()), owned(&expected));
    }

    #[test]
    fn unsorted_unfiltered_output_is_the_raw_collection(records in records_strategy()) {
        let derived = derive(&records, &config(1000), &Criteria::new());
        prop_assert_eq!(owned(derived.items()), records);
    }

    #[test]
    fn descending_reverses_ascending_without_ties(records in distinct_years_strategy()) {
        let config = config(1000);
        let asc = derive(&records, &config, &Criteria::new().with_sort(Some(SortKey::asc("year"))));
        let desc = derive(&records, &config, &Criteria::new().with_sort(Some(SortKey::desc("year"))));

        let mut reversed = owned(asc.items());
        reversed.reverse();
        prop_assert_eq!(owned(desc.items()), reversed);
    }

    #[test]
    fn selecting_all_restores_the_collection(
        records in records_strategy(),
        genre in prop::sample::select(GENRES.to_vec()),
    ) {
        let config = config(1000);
        let mut criteria = Criteria::new()
            .with_filter("genre", FilterSelection::Only(Value::from(genre)));
        let narrowed = derive(&records, &config, &criteria);
        prop_assert!(narrowed.items().iter().all(|r| r.text("genre") == Some(genre)));

        criteria.set_filter("genre", FilterSelection::All);
        let restored = derive(&records, &config, &criteria);
        prop_assert_eq!(owned(restored.items()), records);
    }

    #[test]
    fn pages_concatenate_to_the_full_result(
        records in records_strategy(),
        page_size in 1usize..12,
        query in "[a-z]{0,2}",
    ) {
        let config = config(page_size);
        let base = Criteria::new()
            .with_search(query)
            .with_sort(Some(SortKey::desc("year")));
        let all = derive(&records, &config, &base);
        let pages = all.total_pages();
        prop_assert_eq!(pages, total_pages(all.total_matches(), config.page_size));

        let mut stitched = Vec::new();
        for page in 1..=pages {
            let criteria = base.clone().with_page(page);
            let derived = derive(&records, &config, &criteria);
            prop_assert!(!derived.items().is_empty());
            prop_assert!(derived.items().len() <= page_size);
            stitched.extend(owned(derived.items()));
        }
        prop_assert_eq!(stitched, owned(all.matches()));

        let beyond = derive(&records, &config, &base.clone().with_page(pages + 1));
        prop_assert!(beyond.items().is_empty());
    }
}
