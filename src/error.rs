//! Error types for dataset generation.

use thiserror::Error;

/// Errors produced while validating, generating or encoding a dataset.
///
/// Everything except `Io`, `Encoding`, `Xml`, `Cancelled` and `DeadlineExceeded` is a
/// configuration problem that is detected before any record is generated.
#[derive(Debug, Error)]
pub enum GenError {
    /// Structural problem with the schema (duplicate or malformed names).
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// The schema has no fields.
    #[error("Schema must contain at least one field")]
    EmptySchema,

    /// The field type name is not registered.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// Options attached to a field are unusable for its type.
    #[error("Invalid options for field '{field}': {reason}")]
    InvalidFieldOptions { field: String, reason: String },

    /// Record count is zero, negative, or above the configured maximum.
    #[error("Invalid record count {count}: {reason}")]
    InvalidRecordCount { count: i64, reason: String },

    #[error("Unsupported format: {0}. Use sql, json, csv, or xml")]
    UnsupportedFormat(String),

    #[error("Unsupported dialect: {0}. Use mysql, postgresql, sqlite, or mongodb")]
    UnsupportedDialect(String),

    /// The configuration file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Generation was aborted through a cancel flag.
    #[error("Generation cancelled after {completed} records")]
    Cancelled { completed: usize },

    /// Generation ran past its deadline.
    #[error("Generation timed out after {completed} records")]
    DeadlineExceeded { completed: usize },
}

impl GenError {
    /// True for errors caused by the configuration rather than the run.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GenError::InvalidSchema(_)
                | GenError::EmptySchema
                | GenError::UnknownFieldType(_)
                | GenError::InvalidFieldOptions { .. }
                | GenError::InvalidRecordCount { .. }
                | GenError::UnsupportedFormat(_)
                | GenError::UnsupportedDialect(_)
                | GenError::ConfigParse(_)
        )
    }

    /// Process exit code for the CLI: 2 for validation failures, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
