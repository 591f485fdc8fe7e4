//! Record generator: applies a schema to the field type registry.
//!
//! Each record draws from its own ChaCha stream (`seed`, stream = record
//! index), so record `i` is the same whatever the total count is and records
//! could be produced on separate threads without sharing RNG state.

use crate::error::{GenError, Result};
use crate::registry::{FieldTypeRegistry, RecordRng};
use crate::schema::SchemaDefinition;
use crate::value::{Dataset, Record, Value};
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Probability that a nullable field produces NULL.
pub const NULL_PROBABILITY: f64 = 0.1;

/// Records generated between cancellation/deadline checks.
pub const CHECK_INTERVAL: usize = 100;

/// Shared flag a caller can set to abort a running generation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Optional controls for a single generation run.
#[derive(Default)]
pub struct RunControl {
    pub cancel: Option<CancelFlag>,
    pub deadline: Option<Instant>,
    /// Called with the number of records generated so far
    pub progress: Option<Box<dyn Fn(usize) + Send + Sync>>,
}

impl RunControl {
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    fn check(&self, completed: usize) -> Result<()> {
        if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
            return Err(GenError::Cancelled { completed });
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(GenError::DeadlineExceeded { completed });
        }
        Ok(())
    }

    fn report(&self, completed: usize) {
        if let Some(ref progress) = self.progress {
            progress(completed);
        }
    }
}

/// Produces datasets from a schema.
pub struct RecordGenerator<'r> {
    registry: &'r FieldTypeRegistry,
    seed: u64,
}

impl<'r> RecordGenerator<'r> {
    pub fn new(registry: &'r FieldTypeRegistry, seed: u64) -> Self {
        Self { registry, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random stream for one record.
    fn record_rng(&self, index: usize) -> RecordRng {
        let mut rng = RecordRng::seed_from_u64(self.seed);
        rng.set_stream(index as u64);
        rng
    }

    /// Generate exactly `count` records. Any generator error aborts the run.
    pub fn generate(&self, schema: &SchemaDefinition, count: usize) -> Result<Dataset> {
        self.generate_with(schema, count, &RunControl::default())
    }

    pub fn generate_with(
        &self,
        schema: &SchemaDefinition,
        count: usize,
        control: &RunControl,
    ) -> Result<Dataset> {
        let names: Arc<[String]> = schema.fields.iter().map(|f| f.name.clone()).collect();
        let mut records = Vec::with_capacity(count);

        for index in 0..count {
            if index % CHECK_INTERVAL == 0 {
                control.check(index)?;
                if index > 0 {
                    control.report(index);
                }
            }
            let values = self.record_values(schema, index)?;
            records.push(Record::new(names.clone(), values));
        }
        control.report(count);

        Ok(Dataset::new(names, records))
    }

    /// Generate the single record at `index`.
    pub fn generate_record(&self, schema: &SchemaDefinition, index: usize) -> Result<Record> {
        let names: Arc<[String]> = schema.fields.iter().map(|f| f.name.clone()).collect();
        let values = self.record_values(schema, index)?;
        Ok(Record::new(names, values))
    }

    fn record_values(&self, schema: &SchemaDefinition, index: usize) -> Result<Vec<Value>> {
        let mut rng = self.record_rng(index);
        schema
            .fields
            .iter()
            .map(|field| {
                if field.nullable
                    && !field.field_type.ignores_nullable()
                    && rng.random_bool(NULL_PROBABILITY)
                {
                    return Ok(Value::Null);
                }
                self.registry.generate_field(
                    field.field_type,
                    &field.name,
                    index,
                    &field.options,
                    &mut rng,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldSpec, FieldType};
    use std::sync::atomic::AtomicUsize;

    fn schema() -> SchemaDefinition {
        SchemaDefinition::new("people")
            .field(FieldSpec::new("id", FieldType::AutoIncrement).nullable())
            .field(FieldSpec::new("name", FieldType::FullName))
            .field(FieldSpec::new("score", FieldType::Number).nullable())
    }

    #[test]
    fn test_count_and_order() {
        let registry = FieldTypeRegistry::new();
        let dataset = RecordGenerator::new(&registry, 1)
            .generate(&schema(), 25)
            .unwrap();
        assert_eq!(dataset.len(), 25);
        for record in &dataset {
            assert_eq!(record.names().collect::<Vec<_>>(), vec!["id", "name", "score"]);
        }
    }

    #[test]
    fn test_auto_increment_ignores_nullable() {
        let registry = FieldTypeRegistry::new();
        let dataset = RecordGenerator::new(&registry, 99)
            .generate(&schema(), 300)
            .unwrap();
        let ids: Vec<i64> = dataset
            .column("id")
            .unwrap()
            .into_iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert_eq!(ids, (1..=300).collect::<Vec<_>>());
    }

    #[test]
    fn test_record_is_independent_of_count() {
        let registry = FieldTypeRegistry::new();
        let gen = RecordGenerator::new(&registry, 7);
        let short = gen.generate(&schema(), 5).unwrap();
        let long = gen.generate(&schema(), 50).unwrap();
        assert_eq!(short.records(), &long.records()[..5]);
        assert_eq!(gen.generate_record(&schema(), 3).unwrap(), long.records()[3]);
    }

    #[test]
    fn test_error_aborts_generation() {
        let registry = FieldTypeRegistry::new();
        let schema = SchemaDefinition::new("t")
            .field(FieldSpec::new("id", FieldType::AutoIncrement))
            .field(FieldSpec::new("status", FieldType::Custom));
        let err = RecordGenerator::new(&registry, 1)
            .generate(&schema, 10)
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidFieldOptions { field, .. } if field == "status"));
    }

    #[test]
    fn test_cancel_flag_stops_generation() {
        let registry = FieldTypeRegistry::new();
        let cancel = CancelFlag::new();
        cancel.cancel();
        let control = RunControl::default().with_cancel(cancel);
        let err = RecordGenerator::new(&registry, 1)
            .generate_with(&schema(), 1000, &control)
            .unwrap_err();
        assert!(matches!(err, GenError::Cancelled { completed: 0 }));
    }

    #[test]
    fn test_past_deadline_stops_generation() {
        let registry = FieldTypeRegistry::new();
        let deadline = Instant::now();
        let control = RunControl::default().with_deadline(deadline);
        let err = RecordGenerator::new(&registry, 1)
            .generate_with(&schema(), 1000, &control)
            .unwrap_err();
        assert!(matches!(err, GenError::DeadlineExceeded { .. }));
    }

    #[test]
    fn test_progress_reports_final_count() {
        let registry = FieldTypeRegistry::new();
        let last = Arc::new(AtomicUsize::new(0));
        let sink = last.clone();
        let control = RunControl::default().with_progress(move |n| sink.store(n, Ordering::SeqCst));
        RecordGenerator::new(&registry, 1)
            .generate_with(&schema(), 250, &control)
            .unwrap();
        assert_eq!(last.load(Ordering::SeqCst), 250);
    }
}
