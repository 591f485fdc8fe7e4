//! Schema-driven synthetic test data.
//!
//! A [`SchemaDefinition`] plus a record count goes through the
//! [`RecordGenerator`] (backed by a [`FieldTypeRegistry`]) to produce a
//! [`Dataset`], which any [`Encoder`] turns into SQL, JSON, CSV or XML text.
//! [`Orchestrator`] wires the steps together from a [`GenerateConfig`].

pub mod config;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod json_schema;
pub mod orchestrator;
pub mod registry;
pub mod schema;
pub mod value;
pub mod writer;

pub use config::{FieldConfig, GenerateConfig};
pub use encoder::{Dialect, Encoder, FormatOptions, OutputFormat};
pub use error::{GenError, Result};
pub use generator::{CancelFlag, RecordGenerator, RunControl};
pub use orchestrator::{DatasetResult, Orchestrator};
pub use registry::FieldTypeRegistry;
pub use schema::{FieldOptions, FieldSpec, FieldType, SchemaDefinition};
pub use value::{Dataset, Record, Value};
