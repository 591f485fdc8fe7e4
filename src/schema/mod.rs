//! Schema model for the tables we generate data for.
//!
//! A [`SchemaDefinition`] is an ordered list of [`FieldSpec`]s under a table
//! name. Field order is significant: it is the column order of every record
//! and of every encoded output.

mod field_type;

pub use field_type::{FieldType, SqlColumnKind, ValueKind};

use crate::error::{GenError, Result};
use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Table and field names must be plain identifiers so they can be emitted
/// unquoted in SQL and used as XML element names.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Parameters for a `custom` field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomOptions {
    /// Values to pick from, in the order they were configured
    pub values: Vec<String>,
}

/// Per-type field options.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldOptions {
    #[default]
    None,
    Custom(CustomOptions),
}

impl FieldOptions {
    pub fn custom<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldOptions::Custom(CustomOptions {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    /// Custom values, if these are custom options
    pub fn custom_values(&self) -> Option<&[String]> {
        match self {
            FieldOptions::Custom(opts) => Some(&opts.values),
            FieldOptions::None => None,
        }
    }
}

/// A single field (column) of a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub options: FieldOptions,
    pub nullable: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            options: FieldOptions::None,
            nullable: false,
        }
    }

    /// Shorthand for a `custom` field picking from `values`.
    pub fn custom<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldType::Custom).options(FieldOptions::custom(values))
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Check that the options fit the field type.
    pub fn validate_options(&self) -> Result<()> {
        if self.field_type != FieldType::Custom {
            return Ok(());
        }
        match self.options.custom_values() {
            Some(values) if !values.is_empty() => Ok(()),
            Some(_) => Err(GenError::InvalidFieldOptions {
                field: self.name.clone(),
                reason: "custom values list is empty".to_string(),
            }),
            None => Err(GenError::InvalidFieldOptions {
                field: self.name.clone(),
                reason: "custom fields require a values list".to_string(),
            }),
        }
    }
}

/// Table definition handed to the record generator.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    pub table_name: String,
    pub fields: Vec<FieldSpec>,
}

impl SchemaDefinition {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Field names in schema order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Structural validation: names, duplicates, and per-field options.
    ///
    /// Field types are checked against a registry separately, see
    /// [`crate::registry::FieldTypeRegistry::check_schema`].
    pub fn validate(&self) -> Result<()> {
        if !IDENTIFIER.is_match(&self.table_name) {
            return Err(GenError::InvalidSchema(format!(
                "table name '{}' is not a valid identifier",
                self.table_name
            )));
        }
        if self.fields.is_empty() {
            return Err(GenError::EmptySchema);
        }

        let mut seen = AHashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !IDENTIFIER.is_match(&field.name) {
                return Err(GenError::InvalidSchema(format!(
                    "field name '{}' is not a valid identifier",
                    field.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(GenError::InvalidSchema(format!(
                    "duplicate field name '{}'",
                    field.name
                )));
            }
            field.validate_options()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> SchemaDefinition {
        SchemaDefinition::new("users")
            .field(FieldSpec::new("id", FieldType::AutoIncrement))
            .field(FieldSpec::new("email", FieldType::Email).nullable())
            .field(FieldSpec::custom("status", ["active", "banned"]))
    }

    #[test]
    fn test_builder_preserves_order() {
        let schema = users();
        assert_eq!(schema.field_names(), vec!["id", "email", "status"]);
        assert!(schema.get_field("email").unwrap().nullable);
        assert!(!schema.get_field("id").unwrap().nullable);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_empty_schema_rejected() {
        let err = SchemaDefinition::new("users").validate().unwrap_err();
        assert!(matches!(err, GenError::EmptySchema));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let schema = users().field(FieldSpec::new("email", FieldType::Text));
        let err = schema.validate().unwrap_err();
        assert!(matches!(err, GenError::InvalidSchema(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_bad_identifiers_rejected() {
        let schema = SchemaDefinition::new("my table").field(FieldSpec::new("id", FieldType::Uuid));
        assert!(matches!(schema.validate(), Err(GenError::InvalidSchema(_))));

        let schema = SchemaDefinition::new("t").field(FieldSpec::new("1st", FieldType::Uuid));
        assert!(matches!(schema.validate(), Err(GenError::InvalidSchema(_))));
    }

    #[test]
    fn test_custom_without_values_rejected() {
        let empty = SchemaDefinition::new("t").field(FieldSpec::custom("status", Vec::<String>::new()));
        assert!(matches!(
            empty.validate(),
            Err(GenError::InvalidFieldOptions { field, .. }) if field == "status"
        ));

        let missing = SchemaDefinition::new("t").field(FieldSpec::new("status", FieldType::Custom));
        assert!(matches!(
            missing.validate(),
            Err(GenError::InvalidFieldOptions { .. })
        ));
    }
}
