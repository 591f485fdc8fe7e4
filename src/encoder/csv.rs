//! CSV output: header row of field names, then one row per record.

use super::{check_inputs, Encoder, OutputFormat};
use crate::error::Result;
use crate::schema::SchemaDefinition;
use crate::value::{Dataset, Value};
use std::borrow::Cow;

/// Quote `s` when it contains a comma, a double quote, or a newline.
pub fn escape_csv_field(s: &str) -> Cow<'_, str> {
    if memchr::memchr3(b',', b'"', b'\n', s.as_bytes()).is_some() {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

fn csv_field(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => escape_csv_field(s),
        other => Cow::Owned(other.to_string()),
    }
}

pub struct CsvEncoder;

impl Encoder for CsvEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn encode(&self, schema: &SchemaDefinition, dataset: &Dataset) -> Result<String> {
        check_inputs(schema, dataset)?;

        let mut lines = Vec::with_capacity(dataset.len() + 1);
        lines.push(
            schema
                .fields
                .iter()
                .map(|f| escape_csv_field(&f.name))
                .collect::<Vec<_>>()
                .join(","),
        );
        for record in dataset {
            lines.push(
                record
                    .values()
                    .iter()
                    .map(csv_field)
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        Ok(lines.join("\n"))
    }
}
