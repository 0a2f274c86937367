//! Sort comparator.

use std::cmp::Ordering;

use libris_model::Record;

use crate::criteria::SortDirection;
use crate::field::FieldKind;

/// Compare two records on `field`; descending reverses the result.
pub fn compare_records(
    a: &Record,
    b: &Record,
    field: &str,
    kind: FieldKind,
    direction: SortDirection,
) -> Ordering {
    let ordering = kind.sort_value(a.get(field)).cmp(&kind.sort_value(b.get(field)));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort: records with equal keys keep their input order in
/// both directions.
pub fn sort_records(records: &mut [&Record], field: &str, kind: FieldKind, direction: SortDirection) {
    let mut keyed: Vec<_> = records
        .iter()
        .map(|record| (kind.sort_value(record.get(field)), *record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    });
    for (slot, (_, record)) in records.iter_mut().zip(keyed) {
        *slot = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().filter_map(|r| r.text("title")).collect()
    }

    #[test]
    fn ties_keep_insertion_order_in_both_directions() {
        let a = Record::new().with("title", "A").with("year", 2000);
        let b = Record::new().with("title", "B").with("year", 1990);
        let c = Record::new().with("title", "C").with("year", 2000);

        let mut records = vec![&a, &b, &c];
        sort_records(&mut records, "year", FieldKind::Number, SortDirection::Asc);
        assert_eq!(titles(&records), ["B", "A", "C"]);

        let mut records = vec![&a, &b, &c];
        sort_records(&mut records, "year", FieldKind::Number, SortDirection::Desc);
        assert_eq!(titles(&records), ["A", "C", "B"]);
    }

    #[test]
    fn direction_flips_comparator() {
        let a = Record::new().with("title", "alpha");
        let b = Record::new().with("title", "Beta");
        assert_eq!(
            compare_records(&a, &b, "title", FieldKind::Text, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            compare_records(&a, &b, "title", FieldKind::Text, SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn missing_values_lead_ascending_and_trail_descending() {
        let dated = Record::new().with("title", "dated").with("returnDate", "2024-05-01");
        let open = Record::new().with("title", "open");

        let mut records = vec![&dated, &open];
        sort_records(&mut records, "returnDate", FieldKind::Date, SortDirection::Asc);
        assert_eq!(titles(&records), ["open", "dated"]);

        sort_records(&mut records, "returnDate", FieldKind::Date, SortDirection::Desc);
        assert_eq!(titles(&records), ["dated", "open"]);
    }
}
