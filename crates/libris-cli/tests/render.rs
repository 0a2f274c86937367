//! Rendering of list pages, dashboard panels and sessions.

use std::num::NonZeroUsize;
use std::path::Path;

use chrono::{TimeZone, Utc};

use libris_cli::render::{
    book_panel, list_json, list_table, membership_types_table, page_caption, screens_table,
    session_summary,
};
use libris_model::{RawCollection, Record};
use libris_session::Session;
use libris_stats::{BookStats, StatsBoard};
use libris_view::{ListView, ScreenConfig};

fn catalog() -> RawCollection {
    RawCollection::from_json_str(
        r#"[
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "genre": "SciFi", "year": 1965, "availability": true},
            {"id": 2, "title": "Emma", "author": "Jane Austen", "genre": "Classic", "year": 1815, "availability": false},
            {"id": 3, "title": "Solaris", "author": "Stanislaw Lem", "genre": "SciFi", "year": 1961, "availability": true}
        ]"#,
    )
    .unwrap()
}

fn paged_view(page_size: usize) -> ListView {
    let mut screen = ScreenConfig::books();
    screen.page_size = NonZeroUsize::new(page_size).unwrap();
    ListView::new(screen).with_collection(catalog())
}

#[test]
fn captions_describe_the_page() {
    let mut view = paged_view(2);
    insta::assert_snapshot!(page_caption(&view.view().page()), @"Page 1 of 2 (records 1-2 of 3)");

    view.set_page(2);
    insta::assert_snapshot!(page_caption(&view.view().page()), @"Page 2 of 2 (records 3-3 of 3)");

    view.set_page(5);
    insta::assert_snapshot!(page_caption(&view.view().page()), @"Page 5 is out of range (2 pages, 3 matching records)");

    view.set_search("tolkien");
    insta::assert_snapshot!(page_caption(&view.view().page()), @"No matching records");
}

#[test]
fn json_page_carries_criteria_and_items() {
    let mut view = paged_view(1);
    view.set_filter("genre", "SciFi").unwrap();
    let derived = view.view();
    let output = list_json(&derived, view.config(), view.criteria());
    insta::assert_json_snapshot!(output, @r#"
    {
      "filters": {
        "genre": "SciFi"
      },
      "items": [
        {
          "author": "Frank Herbert",
          "availability": true,
          "genre": "SciFi",
          "id": 1,
          "title": "Dune",
          "year": 1965
        }
      ],
      "page": {
        "firstRow": 1,
        "lastRow": 1,
        "page": 1,
        "pageSize": 1,
        "totalItems": 2,
        "totalPages": 2
      },
      "screen": "books",
      "search": "",
      "sort": {
        "direction": "asc",
        "field": "title"
      }
    }
    "#);
}

#[test]
fn table_marks_the_sort_column() {
    let mut view = paged_view(10);
    view.toggle_sort("year").unwrap();
    view.toggle_sort("year").unwrap();
    let derived = view.view();
    let mut table = list_table(&derived, view.config(), view.criteria());
    table.force_no_tty();
    let rendered = table.to_string();

    assert!(rendered.contains("Year ▼"), "{rendered}");
    assert!(!rendered.contains("Title ▲"));
    let dune = rendered.find("Dune").unwrap();
    let solaris = rendered.find("Solaris").unwrap();
    let emma = rendered.find("Emma").unwrap();
    assert!(dune < solaris && solaris < emma);
    assert!(rendered.contains("Yes") && rendered.contains("No"));
}

#[test]
fn panels_show_freshness() {
    let mut board = StatsBoard::<BookStats>::new("Books");
    let mut table = book_panel(&board);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("Books (unavailable)"), "{rendered}");
    assert!(rendered.contains("No data"));

    let at = Utc.with_ymd_and_hms(2024, 4, 25, 8, 30, 0).unwrap();
    board.record_success(BookStats::compute(catalog().records()), at);
    board.record_failure("connection refused");
    let mut table = book_panel(&board);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(
        rendered.contains("Books (stale since 2024-04-25 08:30 UTC (connection refused))"),
        "{rendered}"
    );
    assert!(rendered.contains("67%"));
}

#[test]
fn reference_tables_list_every_entry() {
    let mut table = membership_types_table();
    table.force_no_tty();
    let rendered = table.to_string();
    for kind in ["STUDENT", "FACULTY", "REGULAR", "PREMIUM"] {
        assert!(rendered.contains(kind), "{rendered}");
    }
    assert!(rendered.contains("2 years"));

    let mut table = screens_table(&[ScreenConfig::books()]);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("availability [available|unavailable]"), "{rendered}");
    assert!(rendered.contains("title asc"));

    let mut table = screens_table(&[ScreenConfig::reservations()]);
    table.force_no_tty();
    assert!(table.to_string().contains("reservationDate (date)"));
}

#[test]
fn session_summary_reads_plainly() {
    let path = Path::new("/tmp/session.json");
    insta::assert_snapshot!(session_summary(&Session::default(), path), @r"
    Session file: /tmp/session.json
    Signed in as: nobody
    Member: not linked
    ");

    let session = Session {
        user: Some(Record::new().with("username", "librarian")),
        member: Some(
            Record::new()
                .with("memberId", "MEM-0042")
                .with("membershipType", "FACULTY"),
        ),
        signed_in_at: Some(Utc.with_ymd_and_hms(2024, 4, 25, 8, 30, 0).unwrap()),
    };
    insta::assert_snapshot!(session_summary(&session, path), @r"
    Session file: /tmp/session.json
    Signed in as: librarian
    Signed in at: 2024-04-25T08:30:00+00:00
    Member: MEM-0042 (FACULTY)
    ");
}
