//! Free-text search predicate.

use libris_model::{Record, Value};

/// True when `query` is empty or any of `fields` contains it.
///
/// `query` must already be trimmed and lower-cased. Matching is plain
/// case-insensitive substring containment and stops at the first hit.
/// Missing fields, booleans and nulls never match.
pub fn matches_search<S: AsRef<str>>(record: &Record, fields: &[S], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|field| {
        record
            .get(field.as_ref())
            .and_then(Value::search_text)
            .is_some_and(|text| text.to_lowercase().contains(query))
    })
}
