//! JSON Schemas for the config file and the `--json` result.
//!
//! Exported through the `schema` subcommand.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// All published schemas, keyed by name.
/// BTreeMap keeps the output order stable.
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();
    schemas.insert("config", schema_for!(crate::config::GenerateConfig));
    schemas.insert("result", schema_for!(crate::orchestrator::DatasetResult));
    schemas
}

pub fn get_schema(name: &str) -> Option<Schema> {
    all_schemas().remove(name)
}

pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}
