use crate::encoder::{sql_column_type, Dialect};
use crate::registry::FieldTypeRegistry;
use serde::Serialize;

/// One row of the `types` listing
#[derive(Serialize)]
pub(crate) struct FieldTypeInfo {
    name: &'static str,
    value_kind: String,
    mysql: &'static str,
    postgresql: &'static str,
    sqlite: &'static str,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let registry = FieldTypeRegistry::new();
    let rows: Vec<FieldTypeInfo> = registry
        .entries()
        .into_iter()
        .map(|entry| FieldTypeInfo {
            name: entry.field_type.as_str(),
            value_kind: entry.value_kind.to_string(),
            mysql: sql_column_type(entry.sql_kind, Dialect::MySql),
            postgresql: sql_column_type(entry.sql_kind, Dialect::PostgreSql),
            sqlite: sql_column_type(entry.sql_kind, Dialect::Sqlite),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<16} {:<8} {:<32} {:<20} {}",
        "TYPE", "VALUE", "MYSQL", "POSTGRESQL", "SQLITE"
    );
    for row in &rows {
        println!(
            "{:<16} {:<8} {:<32} {:<20} {}",
            row.name, row.value_kind, row.mysql, row.postgresql, row.sqlite
        );
    }
    eprintln!("\n{} field types", rows.len());

    Ok(())
}
