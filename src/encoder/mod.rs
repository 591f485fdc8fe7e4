//! Output encoders.
//!
//! Every encoder turns the same `(SchemaDefinition, Dataset)` pair into text:
//! - `sql`: CREATE TABLE + batched INSERT statements for a dialect
//! - `json`: array of objects
//! - `csv`: header row + one row per record
//! - `xml`: one `<record>` element per record

mod csv;
mod json;
mod sql;
mod xml;

pub use self::csv::CsvEncoder;
pub use self::json::JsonEncoder;
pub use self::sql::{sql_column_type, SqlEncoder};
pub use self::xml::XmlEncoder;

use crate::error::{GenError, Result};
use crate::registry::FieldTypeRegistry;
use crate::schema::SchemaDefinition;
use crate::value::Dataset;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Records per INSERT statement unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Sql,
    Json,
    Csv,
    Xml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Sql => "sql",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Sql => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Xml => "application/xml",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = GenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sql" => Ok(OutputFormat::Sql),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(GenError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Target database for SQL output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    PostgreSql,
    Sqlite,
    MongoDb,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::Sqlite => "sqlite",
            Dialect::MongoDb => "mongodb",
        }
    }

    /// Whether SQL output starts with a CREATE TABLE statement
    pub fn has_ddl(&self) -> bool {
        !matches!(self, Dialect::MongoDb)
    }
}

impl std::str::FromStr for Dialect {
    type Err = GenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Dialect::PostgreSql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "mongodb" | "mongo" => Ok(Dialect::MongoDb),
            _ => Err(GenError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-specific knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub dialect: Dialect,
    /// Records per INSERT statement
    pub batch_size: usize,
    /// Emit CREATE TABLE before the INSERTs (ignored for MongoDB)
    pub create_table: bool,
    /// Pretty-print JSON
    pub pretty: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            create_table: true,
            pretty: true,
        }
    }
}

/// Serializes a dataset into one text format.
pub trait Encoder {
    fn format(&self) -> OutputFormat;

    /// Encode `dataset`, whose records follow `schema`'s field order.
    fn encode(&self, schema: &SchemaDefinition, dataset: &Dataset) -> Result<String>;
}

/// Reject inputs no encoder can produce meaningful output for.
pub(crate) fn check_inputs(schema: &SchemaDefinition, dataset: &Dataset) -> Result<()> {
    if schema.fields.is_empty() {
        return Err(GenError::EmptySchema);
    }
    if dataset.is_empty() {
        return Err(GenError::InvalidRecordCount {
            count: 0,
            reason: "dataset has no records".to_string(),
        });
    }
    Ok(())
}

/// Build the encoder for `format`.
pub fn encoder_for<'r>(
    format: OutputFormat,
    options: &FormatOptions,
    registry: &'r FieldTypeRegistry,
) -> Box<dyn Encoder + 'r> {
    match format {
        OutputFormat::Sql => Box::new(
            SqlEncoder::new(options.dialect, registry)
                .with_batch_size(options.batch_size)
                .with_create_table(options.create_table),
        ),
        OutputFormat::Json => Box::new(JsonEncoder::new(options.pretty)),
        OutputFormat::Csv => Box::new(CsvEncoder),
        OutputFormat::Xml => Box::new(XmlEncoder),
    }
}

/// Parse a format token and build its encoder.
pub fn encoder_for_name<'r>(
    format: &str,
    options: &FormatOptions,
    registry: &'r FieldTypeRegistry,
) -> Result<Box<dyn Encoder + 'r>> {
    Ok(encoder_for(format.parse()?, options, registry))
}
