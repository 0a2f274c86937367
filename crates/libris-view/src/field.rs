//! Field kinds and value ordering.
//!
//! Records carry loosely typed JSON values; the screen configuration says
//! how a field should be compared. A value that does not fit its declared
//! kind falls back to case-insensitive text so odd backend data still sorts
//! deterministically.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use libris_model::Value;

/// How a configured field is compared and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Flag,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Flag => "flag",
        }
    }

    /// Parse a raw user-supplied string into a value of this kind.
    pub fn parse_value(&self, raw: &str) -> Option<Value> {
        let trimmed = raw.trim();
        match self {
            FieldKind::Text | FieldKind::Date => Some(Value::Text(trimmed.to_string())),
            FieldKind::Number => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Number),
            FieldKind::Flag => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(Value::Bool(true)),
                "false" | "no" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }

    /// Ordering key for a field value under this kind.
    pub(crate) fn sort_value(&self, value: Option<&Value>) -> SortValue {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return SortValue::Missing;
        };
        let typed = match self {
            FieldKind::Text => None,
            FieldKind::Number => value.to_number().map(SortValue::Number),
            FieldKind::Date => value.as_str().and_then(parse_date).map(SortValue::Date),
            FieldKind::Flag => value.as_bool().map(SortValue::Flag),
        };
        typed.unwrap_or_else(|| SortValue::Text(value.display_text().to_lowercase()))
    }
}

/// Parse an ISO date or date-time string.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS[.fff]` and
/// RFC 3339 with an offset (normalized to UTC).
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.naive_utc())
}

/// Comparable projection of a field value.
///
/// Variants are ranked in declaration order, so missing values sort lowest.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SortValue {
    Missing,
    Flag(bool),
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Flag(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Date(_) => 3,
            SortValue::Text(_) => 4,
        }
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_compares_case_insensitively() {
        let a = FieldKind::Text.sort_value(Some(&Value::from("alpha")));
        let b = FieldKind::Text.sort_value(Some(&Value::from("Beta")));
        assert!(a < b);
    }

    #[test]
    fn numbers_compare_numerically() {
        let nine = FieldKind::Number.sort_value(Some(&Value::from(9)));
        let ten = FieldKind::Number.sort_value(Some(&Value::from("10")));
        assert!(nine < ten);
    }

    #[test]
    fn dates_compare_chronologically_across_formats() {
        let day = FieldKind::Date.sort_value(Some(&Value::from("2024-03-01")));
        let later = FieldKind::Date.sort_value(Some(&Value::from("2024-03-01T09:30:00")));
        let offset = FieldKind::Date.sort_value(Some(&Value::from("2024-02-29T23:00:00-05:00")));
        assert!(day < later);
        assert!(offset > day);
    }

    #[test]
    fn minute_precision_date_times_sort_as_dates() {
        let early = FieldKind::Date.sort_value(Some(&Value::from("2024-01-01T10:00")));
        let late = FieldKind::Date.sort_value(Some(&Value::from("2025-01-01")));
        assert!(matches!(early, SortValue::Date(_)));
        assert!(early < late);
        assert_eq!(
            parse_date("2024-01-01T10:00"),
            NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.and_hms_opt(10, 0, 0))
        );
    }

    #[test]
    fn missing_sorts_lowest() {
        let missing = FieldKind::Number.sort_value(None);
        let null = FieldKind::Number.sort_value(Some(&Value::Null));
        let zero = FieldKind::Number.sort_value(Some(&Value::from(0)));
        assert_eq!(missing, null);
        assert!(missing < zero);
    }

    #[test]
    fn flag_values_parse_from_common_spellings() {
        assert_eq!(FieldKind::Flag.parse_value("Yes"), Some(Value::Bool(true)));
        assert_eq!(FieldKind::Flag.parse_value("0"), Some(Value::Bool(false)));
        assert_eq!(FieldKind::Flag.parse_value("maybe"), None);
        assert_eq!(FieldKind::Number.parse_value("NaN"), None);
    }
}
