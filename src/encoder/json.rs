//! JSON output: an array with one object per record.

use super::{check_inputs, Encoder, OutputFormat};
use crate::error::Result;
use crate::schema::SchemaDefinition;
use crate::value::Dataset;

pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Encoder for JsonEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn encode(&self, schema: &SchemaDefinition, dataset: &Dataset) -> Result<String> {
        check_inputs(schema, dataset)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(dataset)?
        } else {
            serde_json::to_string(dataset)?
        };
        Ok(text)
    }
}
