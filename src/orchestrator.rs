//! Orchestrator: config in, encoded dataset out.
//!
//! The whole config is validated before the first record is generated, so a
//! bad field type, option, count, format or dialect never costs a partial run.

use crate::config::GenerateConfig;
use crate::encoder::{encoder_for, Dialect, FormatOptions, OutputFormat};
use crate::error::Result;
use crate::generator::{RecordGenerator, RunControl};
use crate::registry::{FieldTypeRegistry, TimeWindow};
use crate::schema::SchemaDefinition;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use std::borrow::Cow;
use std::time::Instant;
use tracing::debug;

/// Largest record count accepted unless configured otherwise.
pub const DEFAULT_MAX_COUNT: usize = 10_000;

/// Encoded dataset plus metadata.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatasetResult {
    pub table_name: String,
    pub format: OutputFormat,
    /// Dialect used for SQL output, absent for other formats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    /// Encoded output; the literal file content
    pub text: String,
    pub record_count: usize,
    /// UTF-8 byte length of `text`
    pub size_bytes: usize,
    #[schemars(with = "String")]
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces this dataset
    pub seed: u64,
    /// End of the date range used; pass it back as `now` with `seed` to
    /// reproduce date and time fields
    #[schemars(with = "String")]
    pub now: DateTime<Utc>,
    /// Suggested download name, `<table>.<ext>`
    pub file_name: String,
    pub mime_type: String,
}

/// A config that passed validation.
#[derive(Debug, Clone)]
struct Plan {
    schema: SchemaDefinition,
    count: usize,
    format: OutputFormat,
    options: FormatOptions,
    seed: u64,
    now: DateTime<Utc>,
}

/// Stateless driver; one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    registry: FieldTypeRegistry,
    max_count: usize,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    pub fn new() -> Self {
        Self::with_registry(FieldTypeRegistry::new())
    }

    pub fn with_registry(registry: FieldTypeRegistry) -> Self {
        Self {
            registry,
            max_count: DEFAULT_MAX_COUNT,
        }
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn registry(&self) -> &FieldTypeRegistry {
        &self.registry
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn generate(&self, config: &GenerateConfig) -> Result<DatasetResult> {
        self.generate_with(config, &RunControl::default())
    }

    /// Like [`generate`](Self::generate), honouring cancellation, deadline
    /// and progress reporting from `control`.
    pub fn generate_with(
        &self,
        config: &GenerateConfig,
        control: &RunControl,
    ) -> Result<DatasetResult> {
        let plan = self.plan(config)?;
        debug!(
            table = %plan.schema.table_name,
            fields = plan.schema.fields.len(),
            count = plan.count,
            format = %plan.format,
            seed = plan.seed,
            now = %plan.now,
            "generating dataset"
        );

        let registry = self.registry_ending_at(plan.now);
        let start = Instant::now();
        let dataset = RecordGenerator::new(&registry, plan.seed).generate_with(
            &plan.schema,
            plan.count,
            control,
        )?;
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "records generated");

        let encoder = encoder_for(plan.format, &plan.options, &registry);
        let text = encoder.encode(&plan.schema, &dataset)?;
        debug!(bytes = text.len(), "dataset encoded");

        let dialect = (plan.format == OutputFormat::Sql).then_some(plan.options.dialect);
        Ok(DatasetResult {
            file_name: format!("{}.{}", plan.schema.table_name, plan.format.extension()),
            mime_type: plan.format.mime_type().to_string(),
            table_name: plan.schema.table_name,
            format: plan.format,
            dialect,
            record_count: dataset.len(),
            size_bytes: text.len(),
            text,
            generated_at: Utc::now(),
            seed: plan.seed,
            now: plan.now,
        })
    }

    fn registry_ending_at(&self, now: DateTime<Utc>) -> Cow<'_, FieldTypeRegistry> {
        let window = self.registry.time_window();
        if window.end == now {
            return Cow::Borrowed(&self.registry);
        }
        let mut registry = self.registry.clone();
        registry.set_time_window(TimeWindow {
            start: window.start,
            end: now,
        });
        Cow::Owned(registry)
    }

    /// Validate `config` without generating anything.
    pub fn validate(&self, config: &GenerateConfig) -> Result<()> {
        self.plan(config).map(|_| ())
    }

    fn plan(&self, config: &GenerateConfig) -> Result<Plan> {
        let schema = config.schema()?;
        self.registry.check_schema(&schema)?;
        let count = config.checked_record_count(self.max_count)?;
        let format = config.output_format()?;
        let options = config.format_options()?;
        Ok(Plan {
            schema,
            count,
            format,
            options,
            seed: config.seed.unwrap_or_else(rand::random),
            now: config.now.unwrap_or(self.registry.time_window().end),
        })
    }
}
