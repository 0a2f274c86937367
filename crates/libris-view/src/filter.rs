//! Category filter predicate.

use libris_model::Record;

use crate::criteria::FilterSelection;

/// True for the "all" sentinel, otherwise exact equality between the
/// record's field and the selected value. A missing field never matches a
/// concrete selection.
pub fn matches_filter(record: &Record, field: &str, selection: &FilterSelection) -> bool {
    match selection {
        FilterSelection::All => true,
        FilterSelection::Only(expected) => record.get(field) == Some(expected),
    }
}

/// All active filters must pass.
pub fn matches_all<'a, I>(record: &Record, filters: I) -> bool
where
    I: IntoIterator<Item = (&'a String, &'a FilterSelection)>,
{
    filters
        .into_iter()
        .all(|(field, selection)| matches_filter(record, field, selection))
}

#[cfg(test)]
mod tests {
    use libris_model::Value;

    use super::*;

    #[test]
    fn sentinel_passes_records_without_the_field() {
        assert!(matches_filter(&Record::new(), "status", &FilterSelection::All));
    }

    #[test]
    fn equality_is_exact() {
        let record = Record::new().with("status", "ACTIVE").with("availability", true);
        let active = FilterSelection::Only(Value::from("ACTIVE"));
        let lower = FilterSelection::Only(Value::from("active"));
        assert!(matches_filter(&record, "status", &active));
        assert!(!matches_filter(&record, "status", &lower));
        assert!(matches_filter(
            &record,
            "availability",
            &FilterSelection::Only(Value::Bool(true))
        ));
        assert!(!matches_filter(
            &record,
            "availability",
            &FilterSelection::Only(Value::from("true"))
        ));
    }

    #[test]
    fn missing_field_does_not_match() {
        let selection = FilterSelection::Only(Value::from("SciFi"));
        assert!(!matches_filter(&Record::new(), "genre", &selection));
    }
}
