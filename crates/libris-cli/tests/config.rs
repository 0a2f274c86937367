//! Configuration files and collection inputs.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use libris_cli::config::LibrisConfig;
use libris_cli::input::{load_collection, parse_record};
use libris_model::EntityKind;
use libris_view::SortKey;

#[test]
fn explicit_config_file_is_applied() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("libris.toml");
    fs::write(
        &path,
        r#"
session_file = "/var/lib/libris/session.json"

[screens.borrowings]
page_size = 50
sort = "dueDate"
"#,
    )
    .unwrap();

    let config = LibrisConfig::load(Some(&path)).unwrap();
    assert_eq!(
        config.session_path().unwrap(),
        PathBuf::from("/var/lib/libris/session.json")
    );
    let screen = config.screen(EntityKind::Borrowing).unwrap();
    assert_eq!(screen.page_size.get(), 50);
    assert_eq!(screen.default_sort, Some(SortKey::asc("dueDate")));
    assert_eq!(config.screen(EntityKind::Book).unwrap().page_size.get(), 10);
}

#[test]
fn explicit_config_that_does_not_parse_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("libris.toml");
    fs::write(&path, "[screens.books\npage_size = 5").unwrap();
    let error = LibrisConfig::load(Some(&path)).unwrap_err();
    assert!(format!("{error:#}").contains("parse config"));
}

#[test]
fn collections_load_from_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("members.json");
    fs::write(
        &path,
        r#"{"success": true, "data": [{"memberId": "M1"}, {"memberId": "M2"}]}"#,
    )
    .unwrap();
    let members = load_collection(&path).unwrap();
    assert_eq!(members.len(), 2);

    assert!(load_collection(&dir.path().join("missing.json")).is_err());
}

#[test]
fn inline_records_must_be_objects() {
    let user = parse_record(r#"{"id": 3, "username": "ada", "roles": ["ADMIN"]}"#).unwrap();
    assert_eq!(user.text("username"), Some("ada"));
    assert!(user.get("roles").is_none());

    assert!(parse_record("[1, 2]").is_err());
    assert!(parse_record("not json").is_err());
}
