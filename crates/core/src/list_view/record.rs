//! Dynamic records addressed by field name

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::compare::{FieldValue, Sortable};
use super::types::FieldKind;

/// A raw field value in a dynamic record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

/// Field descriptor: the field name plus how its values compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    pub kind: FieldKind,
}

impl RecordField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }
}

/// Flat mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Parse a JSON array of flat objects, e.g. `[{"name":"John","points":45}]`
    pub fn list_from_json(json: &str) -> Result<Vec<Record>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl Sortable for Record {
    type Field = RecordField;

    fn field_kind(field: &RecordField) -> FieldKind {
        field.kind
    }

    fn field_value(&self, field: &RecordField) -> Option<FieldValue<'_>> {
        self.0.get(&field.name).map(|value| match value {
            Value::Number(n) => FieldValue::Number(*n),
            Value::Text(s) => FieldValue::text(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::{SortDirection, SortableList};

    fn student(name: &str, points: u32) -> Record {
        Record::new().with("name", name).with("points", points)
    }

    fn names(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| match r.get("name") {
                Some(Value::Text(s)) => s.clone(),
                _ => String::new(),
            })
            .collect()
    }

    #[test]
    fn test_sort_records_by_named_field() {
        let records = vec![student("Mike", 65), student("John", 45), student("Jane", 25)];
        let mut list = SortableList::new(records, RecordField::text("name"), SortDirection::Ascending);
        assert_eq!(names(list.items()), vec!["Jane", "John", "Mike"]);
        assert_eq!(names(list.sort_by(RecordField::number("points"))), vec!["Mike", "John", "Jane"]);
        assert_eq!(names(list.sort_by(RecordField::number("points"))), vec!["Jane", "John", "Mike"]);
    }

    #[test]
    fn test_absent_field_sorts_last() {
        let records = vec![
            Record::new().with("name", "no-date"),
            Record::new().with("name", "old").with("last", "2023-12-01"),
            Record::new().with("name", "new").with("last", "2024-03-08"),
        ];
        let mut list = SortableList::new(records, RecordField::text("name"), SortDirection::Ascending);
        assert_eq!(names(list.sort_by(RecordField::date("last"))), vec!["new", "old", "no-date"]);
        assert_eq!(names(list.sort_by(RecordField::date("last"))), vec!["old", "new", "no-date"]);
    }

    #[test]
    fn test_unparseable_date_stays_after_real_dates() {
        let records = vec![
            Record::new().with("name", "bad").with("d", "n/a"),
            Record::new().with("name", "old").with("d", "2023-01-01"),
            Record::new().with("name", "new").with("d", "2024-3-7"),
        ];
        let mut list = SortableList::new(records, RecordField::text("name"), SortDirection::Ascending);
        assert_eq!(names(list.sort_by(RecordField::date("d"))), vec!["new", "old", "bad"]);
        assert_eq!(names(list.sort_by(RecordField::date("d"))), vec!["old", "new", "bad"]);
    }

    #[test]
    fn test_records_from_json() {
        let records = Record::list_from_json(r#"[{"name":"John","points":45},{"name":"Jane"}]"#).unwrap();
        assert_eq!(records[0].get("points"), Some(&Value::Number(45.0)));
        assert_eq!(records[0].get("name"), Some(&Value::Text("John".to_string())));
        assert_eq!(records[1].get("points"), None);
        assert!(Record::list_from_json(r#"{"name":"John"}"#).is_err());
    }
}
