//! Entity records and raw collections.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{ModelError, Result};
use crate::value::Value;

/// Field names checked, in order, for the server-provided identifier.
pub const ID_FIELDS: [&str; 2] = ["id", "_id"];

/// One book, member, borrowing or reservation as returned by the backend.
///
/// Records are replaced wholesale after a server round trip; nothing in
/// this workspace edits a loaded record in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Build from a JSON object, dropping fields that are not primitive.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut fields = BTreeMap::new();
        for (name, raw) in object {
            match Value::from_json(raw) {
                Some(value) => {
                    fields.insert(name.clone(), value);
                }
                None => debug!(field = %name, "dropping non-primitive field"),
            }
        }
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::to_number)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Server-provided identifier (`id`, falling back to `_id`).
    pub fn id(&self) -> Option<Cow<'_, str>> {
        ID_FIELDS
            .iter()
            .filter_map(|name| self.get(name))
            .find(|value| !value.is_null())
            .map(Value::display_text)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(&self.fields)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Record::from_json_object(&object))
    }
}

/// Entity records as last loaded from the backend, unfiltered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCollection {
    records: Vec<Record>,
}

impl RawCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json_value(&value)
    }

    /// Accepts a bare array of objects or the backend's `{ "data": [...] }`
    /// envelope.
    ///
    /// Array elements that are not objects are skipped with a warning so a
    /// partial response still renders.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(object) => match object.get("data") {
                Some(serde_json::Value::Array(items)) => items,
                Some(other) => {
                    return Err(ModelError::NotACollection {
                        found: json_kind(other),
                    });
                }
                None => return Err(ModelError::NotACollection { found: "object" }),
            },
            other => {
                return Err(ModelError::NotACollection {
                    found: json_kind(other),
                });
            }
        };
        let mut records = Vec::with_capacity(items.len());
        let mut skipped = 0usize;
        for (index, item) in items.iter().enumerate() {
            match item {
                serde_json::Value::Object(object) => {
                    records.push(Record::from_json_object(object));
                }
                other => {
                    skipped += 1;
                    warn!(index, found = json_kind(other), "skipping non-object entry");
                }
            }
        }
        debug!(records = records.len(), skipped, "parsed raw collection");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id().is_some_and(|value| value == id))
    }
}

impl From<Vec<Record>> for RawCollection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for RawCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RawCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
