//! Generated values, records and datasets.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

static NULL: Value = Value::Null;

/// A single generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// Plain text form used by the CSV and XML encoders. `Null` renders empty.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// One generated row: values in schema field order.
///
/// Field names are shared between all records of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    names: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    /// Missing trailing values become `Null`; values without a name are dropped.
    pub fn new(names: Arc<[String]>, mut values: Vec<Value>) -> Self {
        values.resize(names.len(), Value::Null);
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|idx| self.values.get(idx))
    }

    /// `(name, value)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names.iter().map(String::as_str).zip(self.values.iter())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The full ordered set of generated records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    names: Arc<[String]>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(names: Arc<[String]>, records: Vec<Record>) -> Self {
        Self { names, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Values of one column, in record order. Records lacking the field
    /// contribute `Null`.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        if !self.names.iter().any(|n| n == name) {
            return None;
        }
        Some(
            self.records
                .iter()
                .map(|r| r.get(name).unwrap_or(&NULL))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Arc<[String]> {
        vec!["id".to_string(), "name".to_string()].into()
    }

    #[test]
    fn test_record_lookup_and_order() {
        let record = Record::new(names(), vec![Value::Integer(1), Value::from("Ann")]);
        assert_eq!(record.get("name"), Some(&Value::String("Ann".to_string())));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.names().collect::<Vec<_>>(), vec!["id", "name"]);
    }

    #[test]
    fn test_record_serializes_in_field_order() {
        let record = Record::new(
            vec!["z".to_string(), "a".to_string()].into(),
            vec![Value::Null, Value::Boolean(true)],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"z":null,"a":true}"#);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Float(12.5).to_string(), "12.5");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn test_dataset_column() {
        let names = names();
        let dataset = Dataset::new(
            names.clone(),
            vec![
                Record::new(names.clone(), vec![Value::Integer(1), Value::Null]),
                Record::new(names, vec![Value::Integer(2), Value::from("Bo")]),
            ],
        );
        let ids: Vec<i64> = dataset
            .column("id")
            .unwrap()
            .into_iter()
            .filter_map(Value::as_i64)
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(dataset.column("nope").is_none());
    }

    #[test]
    fn test_record_length_follows_names() {
        let short = Record::new(names(), vec![Value::Integer(1)]);
        assert_eq!(short.len(), 2);
        assert_eq!(short.get("name"), Some(&Value::Null));

        let long = Record::new(
            names(),
            vec![Value::Integer(1), Value::from("Ann"), Value::Boolean(true)],
        );
        assert_eq!(long.values().len(), 2);
        assert_eq!(serde_json::to_string(&long).unwrap(), r#"{"id":1,"name":"Ann"}"#);
    }

    #[test]
    fn test_column_over_mismatched_records() {
        let other: Arc<[String]> = vec!["id".to_string()].into();
        let dataset = Dataset::new(
            names(),
            vec![
                Record::new(names(), vec![Value::Integer(1), Value::from("Ann")]),
                Record::new(other, vec![Value::Integer(2)]),
            ],
        );
        let column = dataset.column("name").unwrap();
        assert_eq!(column, vec![&Value::from("Ann"), &Value::Null]);
    }
}
