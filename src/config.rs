//! Generation config files.
//!
//! A config file describes one table and how much data to produce for it:
//!
//! ```yaml
//! tableName: users
//! recordCount: 100
//! format: sql
//! dialect: postgresql
//! fields:
//!   - { name: id, type: auto_increment }
//!   - { name: email, type: email, nullable: true }
//!   - name: status
//!     type: custom
//!     options: { values: [active, banned] }
//! ```
//!
//! Files ending in `.yaml`/`.yml` are read as YAML, everything else as JSON.
//! Keys are camelCase in both.

use crate::encoder::{Dialect, FormatOptions, OutputFormat, DEFAULT_BATCH_SIZE};
use crate::error::{GenError, Result};
use crate::schema::{FieldOptions, FieldSpec, FieldType, SchemaDefinition};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_record_count() -> i64 {
    100
}

fn default_format() -> String {
    "sql".to_string()
}

fn default_true() -> bool {
    true
}

/// One field of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    /// Field type name, e.g. `email` or `custom`
    #[serde(rename = "type")]
    pub field_type: String,
    /// Type-specific options. `custom` takes `{ "values": [...] }` or
    /// `{ "values": "a,b,c" }`.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub options: serde_json::Value,
    #[serde(default)]
    pub nullable: bool,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            options: serde_json::Value::Null,
            nullable: false,
        }
    }

    /// Resolve the type name and options into a [`FieldSpec`].
    pub fn to_field_spec(&self) -> Result<FieldSpec> {
        let field_type: FieldType = self.field_type.parse()?;
        let options = parse_options(&self.name, field_type, &self.options)?;
        Ok(FieldSpec {
            name: self.name.clone(),
            field_type,
            options,
            nullable: self.nullable,
        })
    }
}

/// Everything needed for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    pub table_name: String,
    pub fields: Vec<FieldConfig>,
    #[serde(default = "default_record_count")]
    pub record_count: i64,
    /// `sql`, `json`, `csv` or `xml`
    #[serde(default = "default_format")]
    pub format: String,
    /// SQL dialect, `mysql` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    /// RNG seed; a random one is chosen and reported when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// End of the range date and time fields draw from (RFC 3339).
    /// Defaults to the moment the generator was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub now: Option<DateTime<Utc>>,
    /// Records per INSERT statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    /// Emit CREATE TABLE before the INSERTs
    #[serde(default = "default_true")]
    pub create_table: bool,
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl GenerateConfig {
    pub fn new(table_name: impl Into<String>, fields: Vec<FieldConfig>) -> Self {
        Self {
            table_name: table_name.into(),
            fields,
            record_count: default_record_count(),
            format: default_format(),
            dialect: None,
            seed: None,
            now: None,
            batch_size: None,
            create_table: true,
            pretty: true,
        }
    }

    /// Load a config from a JSON or YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| GenError::ConfigParse(e.to_string()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| GenError::ConfigParse(e.to_string()))
    }

    /// Build the schema, checking names and field options.
    pub fn schema(&self) -> Result<SchemaDefinition> {
        let fields = self
            .fields
            .iter()
            .map(FieldConfig::to_field_spec)
            .collect::<Result<Vec<_>>>()?;
        let schema = SchemaDefinition {
            table_name: self.table_name.clone(),
            fields,
        };
        schema.validate()?;
        Ok(schema)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    pub fn sql_dialect(&self) -> Result<Dialect> {
        match self.dialect.as_deref() {
            Some(d) => d.parse(),
            None => Ok(Dialect::default()),
        }
    }

    /// Record count as a usize within `1..=max_count`.
    pub fn checked_record_count(&self, max_count: usize) -> Result<usize> {
        let count = self.record_count;
        if count < 1 {
            return Err(GenError::InvalidRecordCount {
                count,
                reason: "must be at least 1".to_string(),
            });
        }
        match usize::try_from(count) {
            Ok(n) if n <= max_count => Ok(n),
            _ => Err(GenError::InvalidRecordCount {
                count,
                reason: format!("must not exceed {}", max_count),
            }),
        }
    }

    /// Encoder options. The dialect is only read for SQL output.
    pub fn format_options(&self) -> Result<FormatOptions> {
        let dialect = match self.output_format()? {
            OutputFormat::Sql => self.sql_dialect()?,
            _ => Dialect::default(),
        };
        Ok(FormatOptions {
            dialect,
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1),
            create_table: self.create_table,
            pretty: self.pretty,
        })
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> GenError {
    GenError::InvalidFieldOptions {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn parse_options(
    field: &str,
    field_type: FieldType,
    options: &serde_json::Value,
) -> Result<FieldOptions> {
    use serde_json::Value as Json;

    if field_type != FieldType::Custom {
        return match options {
            Json::Null | Json::Object(_) => Ok(FieldOptions::None),
            _ => Err(invalid(field, "options must be an object")),
        };
    }

    let values = match options {
        Json::Object(map) => map.get("values"),
        Json::Null => None,
        _ => return Err(invalid(field, "options must be an object")),
    };
    let Some(values) = values.filter(|v| !v.is_null()) else {
        return Err(invalid(field, "custom fields require a values list"));
    };

    let values: Vec<String> = match values {
        Json::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect(),
        Json::Array(items) => items
            .iter()
            .map(|item| match item {
                Json::String(s) => Ok(s.clone()),
                Json::Number(n) => Ok(n.to_string()),
                Json::Bool(b) => Ok(b.to_string()),
                _ => Err(invalid(field, "custom values must be strings, numbers or booleans")),
            })
            .collect::<Result<_>>()?,
        _ => return Err(invalid(field, "values must be a list or a comma-separated string")),
    };

    if values.is_empty() {
        return Err(invalid(field, "custom values list is empty"));
    }
    Ok(FieldOptions::custom(values))
}
