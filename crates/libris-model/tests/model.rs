//! Tests for libris-model types.

use libris_model::{MembershipType, ModelError, RawCollection, Record, Value};

#[test]
fn parses_bare_array() {
    let raw = RawCollection::from_json_str(
        r#"[
            {"id": "b1", "title": "Zeta", "year": 2001, "availability": true},
            {"id": "b2", "title": "Alpha", "year": 1999, "availability": false}
        ]"#,
    )
    .expect("parse collection");

    assert_eq!(raw.len(), 2);
    let first = &raw.records()[0];
    assert_eq!(first.text("title"), Some("Zeta"));
    assert_eq!(first.number("year"), Some(2001.0));
    assert_eq!(first.flag("availability"), Some(true));
}

#[test]
fn parses_backend_envelope() {
    let raw = RawCollection::from_json_str(
        r#"{"success": true, "message": "ok", "data": [{"id": "m1", "firstName": "Ada"}]}"#,
    )
    .expect("parse envelope");

    assert_eq!(raw.len(), 1);
    assert_eq!(raw.find_by_id("m1").and_then(|r| r.text("firstName")), Some("Ada"));
}

#[test]
fn rejects_non_collections() {
    let err = RawCollection::from_json_str(r#""books""#).unwrap_err();
    assert!(matches!(err, ModelError::NotACollection { found: "string" }));

    let err = RawCollection::from_json_str(r#"{"title": "Zeta"}"#).unwrap_err();
    assert!(matches!(err, ModelError::NotACollection { found: "object" }));

    let err = RawCollection::from_json_str("[{").unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));
}

#[test]
fn skips_non_object_entries_and_nested_fields() {
    let raw = RawCollection::from_json_str(
        r#"[{"id": 1, "tags": ["a"], "meta": {"x": 1}, "title": "Kept"}, 42, null]"#,
    )
    .expect("parse partial collection");

    assert_eq!(raw.len(), 1);
    let record = &raw.records()[0];
    assert!(record.get("tags").is_none());
    assert!(record.get("meta").is_none());
    assert_eq!(record.text("title"), Some("Kept"));
}

#[test]
fn record_serializes_to_plain_object() {
    let record = Record::new()
        .with("title", "Dune")
        .with("year", 1965)
        .with("price", 9.5)
        .with("availability", true)
        .with("returnDate", Value::Null);

    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(
        json,
        serde_json::json!({
            "availability": true,
            "price": 9.5,
            "returnDate": null,
            "title": "Dune",
            "year": 1965
        })
    );

    let back: Record = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(back, record);
}

#[test]
fn membership_catalog_matches_backend() {
    let student: MembershipType = "student".parse().expect("parse student");
    assert_eq!(student.borrowing_limit(), 5);
    assert_eq!(student.duration_years(), 1);
    assert!((student.daily_fine_rate() - 0.5).abs() < f64::EPSILON);

    let premium: MembershipType = "Premium".parse().expect("parse display name");
    assert_eq!(premium.as_str(), "PREMIUM");
    assert_eq!(premium.borrowing_limit(), 15);
    assert!((premium.fine_for(3) - 0.3).abs() < 1e-9);

    assert!("BASIC".parse::<MembershipType>().is_err());
}
