use crate::json_schema;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

pub fn run(name: Option<String>, output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let schemas = match name {
        Some(name) => {
            let schema = json_schema::get_schema(&name).with_context(|| {
                format!(
                    "unknown schema '{}'. Available: {}",
                    name,
                    json_schema::schema_names().join(", ")
                )
            })?;
            vec![(name, schema)]
        }
        None => json_schema::all_schemas()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    };

    match output_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            for (name, schema) in &schemas {
                let path = dir.join(format!("{}.schema.json", name));
                let body = serde_json::to_string_pretty(schema)?;
                fs::write(&path, body + "\n")
                    .with_context(|| format!("failed to write {}", path.display()))?;
                eprintln!("  → {}", path.display());
            }
        }
        None if schemas.len() == 1 => {
            println!("{}", serde_json::to_string_pretty(&schemas[0].1)?);
        }
        None => {
            let map: serde_json::Map<String, serde_json::Value> = schemas
                .into_iter()
                .map(|(k, v)| Ok((k, serde_json::to_value(v)?)))
                .collect::<serde_json::Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
    }

    Ok(())
}
