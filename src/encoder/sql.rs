//! SQL output: CREATE TABLE plus batched multi-row INSERT statements.

use super::{check_inputs, Dialect, Encoder, OutputFormat, DEFAULT_BATCH_SIZE};
use crate::error::Result;
use crate::registry::FieldTypeRegistry;
use crate::schema::{FieldSpec, SchemaDefinition, SqlColumnKind};
use crate::value::{Dataset, Record, Value};

/// Column type for `kind` in `dialect`.
pub fn sql_column_type(kind: SqlColumnKind, dialect: Dialect) -> &'static str {
    match (kind, dialect) {
        (SqlColumnKind::Serial, Dialect::PostgreSql) => "SERIAL PRIMARY KEY",
        (SqlColumnKind::Serial, Dialect::Sqlite) => "INTEGER PRIMARY KEY AUTOINCREMENT",
        (SqlColumnKind::Serial, _) => "INT AUTO_INCREMENT PRIMARY KEY",
        (SqlColumnKind::Int, _) => "INT",
        (SqlColumnKind::Decimal, _) => "DECIMAL(10,2)",
        (SqlColumnKind::Boolean, _) => "BOOLEAN",
        (SqlColumnKind::Text, _) => "TEXT",
        (SqlColumnKind::VarChar, _) => "VARCHAR(255)",
        (SqlColumnKind::Date, _) => "DATE",
        (SqlColumnKind::DateTime, Dialect::PostgreSql) => "TIMESTAMP",
        (SqlColumnKind::DateTime, _) => "DATETIME",
        (SqlColumnKind::Timestamp, _) => "TIMESTAMP",
    }
}

/// Double embedded single quotes.
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => format!("'{}'", escape_sql_string(s)),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
    }
}

pub struct SqlEncoder<'r> {
    dialect: Dialect,
    registry: &'r FieldTypeRegistry,
    batch_size: usize,
    create_table: bool,
}

impl<'r> SqlEncoder<'r> {
    pub fn new(dialect: Dialect, registry: &'r FieldTypeRegistry) -> Self {
        Self {
            dialect,
            registry,
            batch_size: DEFAULT_BATCH_SIZE,
            create_table: true,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_create_table(mut self, create_table: bool) -> Self {
        self.create_table = create_table;
        self
    }

    fn column_def(&self, field: &FieldSpec) -> Result<String> {
        let kind = self.registry.get(field.field_type)?.sql_kind;
        let mut def = format!("  {} {}", field.name, sql_column_type(kind, self.dialect));
        if !field.nullable && kind != SqlColumnKind::Serial {
            def.push_str(" NOT NULL");
        }
        Ok(def)
    }

    fn create_table_stmt(&self, schema: &SchemaDefinition) -> Result<String> {
        let columns = schema
            .fields
            .iter()
            .map(|f| self.column_def(f))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!(
            "CREATE TABLE {} (\n{}\n);",
            schema.table_name,
            columns.join(",\n")
        ))
    }

    fn insert_stmt(&self, schema: &SchemaDefinition, columns: &str, batch: &[Record]) -> String {
        let tuples: Vec<String> = batch
            .iter()
            .map(|record| {
                let values: Vec<String> = record.values().iter().map(sql_literal).collect();
                format!("({})", values.join(", "))
            })
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES\n{};",
            schema.table_name,
            columns,
            tuples.join(",\n")
        )
    }
}

impl Encoder for SqlEncoder<'_> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Sql
    }

    fn encode(&self, schema: &SchemaDefinition, dataset: &Dataset) -> Result<String> {
        check_inputs(schema, dataset)?;

        let mut statements = Vec::with_capacity(dataset.len() / self.batch_size + 2);
        if self.create_table && self.dialect.has_ddl() {
            statements.push(self.create_table_stmt(schema)?);
        }

        let columns = schema.field_names().join(", ");
        for batch in dataset.records().chunks(self.batch_size) {
            statements.push(self.insert_stmt(schema, &columns, batch));
        }

        Ok(statements.join("\n\n"))
    }
}
