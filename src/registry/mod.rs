//! Field type registry: value generators plus per-type format hints.
//!
//! The registry is built once and only read afterwards, so a single instance
//! can be shared by any number of concurrent generation runs.

mod generators;
mod pools;

use crate::error::{GenError, Result};
use crate::schema::{FieldOptions, FieldType, SchemaDefinition, SqlColumnKind, ValueKind};
use crate::value::Value;
use ahash::AHashMap;
use chrono::{DateTime, TimeZone, Utc};
use rand_chacha::ChaCha8Rng;

/// Random source handed to every generator.
pub type RecordRng = ChaCha8Rng;

/// Signature of a value generator.
pub type GenerateFn = fn(&GenContext<'_>, &FieldOptions, &mut RecordRng) -> Result<Value>;

/// Range that date and time fields draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// `[2020-01-01T00:00:00Z, end)`
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        Self {
            start: default_window_start(),
            end,
        }
    }
}

fn default_window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Per-call context for a generator.
#[derive(Debug, Clone, Copy)]
pub struct GenContext<'a> {
    /// Zero-based record index
    pub index: usize,
    /// Name of the field being generated, for error messages
    pub field: &'a str,
    pub window: &'a TimeWindow,
}

/// A registered field type.
#[derive(Clone, Copy)]
pub struct FieldTypeEntry {
    pub field_type: FieldType,
    /// Kind of value the generator returns (when not NULL)
    pub value_kind: ValueKind,
    /// Column kind used for CREATE TABLE
    pub sql_kind: SqlColumnKind,
    generate: GenerateFn,
}

impl FieldTypeEntry {
    pub fn new(
        field_type: FieldType,
        value_kind: ValueKind,
        sql_kind: SqlColumnKind,
        generate: GenerateFn,
    ) -> Self {
        Self {
            field_type,
            value_kind,
            sql_kind,
            generate,
        }
    }
}

impl std::fmt::Debug for FieldTypeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTypeEntry")
            .field("field_type", &self.field_type)
            .field("value_kind", &self.value_kind)
            .field("sql_kind", &self.sql_kind)
            .finish_non_exhaustive()
    }
}

/// Catalog of field types available to the record generator.
#[derive(Debug, Clone)]
pub struct FieldTypeRegistry {
    entries: AHashMap<FieldType, FieldTypeEntry>,
    window: TimeWindow,
}

impl Default for FieldTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldTypeRegistry {
    /// Registry with every built-in type. "Now" is pinned at construction.
    pub fn new() -> Self {
        Self::with_time_window(TimeWindow::ending_at(Utc::now()))
    }

    /// Registry with every built-in type and an explicit date range.
    pub fn with_time_window(window: TimeWindow) -> Self {
        let mut registry = Self {
            entries: AHashMap::new(),
            window,
        };
        for entry in generators::builtin_entries() {
            registry.register(entry);
        }
        registry
    }

    /// Registry with no types registered.
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
            window: TimeWindow::ending_at(Utc::now()),
        }
    }

    /// Add or replace a field type.
    pub fn register(&mut self, entry: FieldTypeEntry) {
        self.entries.insert(entry.field_type, entry);
    }

    pub fn time_window(&self) -> &TimeWindow {
        &self.window
    }

    /// Replace the date range, keeping the registered types.
    pub fn set_time_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    pub fn contains(&self, field_type: FieldType) -> bool {
        self.entries.contains_key(&field_type)
    }

    pub fn get(&self, field_type: FieldType) -> Result<&FieldTypeEntry> {
        self.entries
            .get(&field_type)
            .ok_or_else(|| GenError::UnknownFieldType(field_type.as_str().to_string()))
    }

    /// Registered entries in catalog order
    pub fn entries(&self) -> Vec<&FieldTypeEntry> {
        FieldType::ALL
            .iter()
            .filter_map(|ty| self.entries.get(ty))
            .collect()
    }

    /// Generate one value of `field_type` for record `index`.
    pub fn generate(
        &self,
        field_type: FieldType,
        index: usize,
        options: &FieldOptions,
        rng: &mut RecordRng,
    ) -> Result<Value> {
        self.generate_field(field_type, field_type.as_str(), index, options, rng)
    }

    pub(crate) fn generate_field(
        &self,
        field_type: FieldType,
        field: &str,
        index: usize,
        options: &FieldOptions,
        rng: &mut RecordRng,
    ) -> Result<Value> {
        let entry = self.get(field_type)?;
        let ctx = GenContext {
            index,
            field,
            window: &self.window,
        };
        (entry.generate)(&ctx, options, rng)
    }

    /// Verify every field of `schema` uses a registered type.
    pub fn check_schema(&self, schema: &SchemaDefinition) -> Result<()> {
        for field in &schema.fields {
            self.get(field.field_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn registry() -> FieldTypeRegistry {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        FieldTypeRegistry::with_time_window(TimeWindow::ending_at(end))
    }

    fn gen(ty: FieldType, index: usize) -> Value {
        let mut rng = RecordRng::seed_from_u64(7);
        registry()
            .generate(ty, index, &FieldOptions::None, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_every_builtin_is_registered() {
        let registry = registry();
        for ty in FieldType::ALL {
            assert!(registry.contains(*ty), "{} missing", ty);
        }
        assert_eq!(registry.entries().len(), FieldType::ALL.len());
    }

    #[test]
    fn test_builtins_match_their_value_kind() {
        let registry = registry();
        let mut rng = RecordRng::seed_from_u64(1);
        let options = FieldOptions::custom(["x"]);
        for entry in registry.entries() {
            let value = registry
                .generate(entry.field_type, 3, &options, &mut rng)
                .unwrap();
            let ok = match entry.value_kind {
                ValueKind::String => matches!(value, Value::String(_)),
                ValueKind::Integer => matches!(value, Value::Integer(_)),
                ValueKind::Float => matches!(value, Value::Float(_)),
                ValueKind::Boolean => matches!(value, Value::Boolean(_)),
            };
            assert!(ok, "{} produced {:?}", entry.field_type, value);
        }
    }

    #[test]
    fn test_auto_increment_is_one_based() {
        assert_eq!(gen(FieldType::AutoIncrement, 0), Value::Integer(1));
        assert_eq!(gen(FieldType::AutoIncrement, 41), Value::Integer(42));
    }

    #[test]
    fn test_uuid_shape() {
        let value = gen(FieldType::Uuid, 0);
        let s = value.as_str().unwrap();
        assert_eq!(s.len(), 36);
        let groups: Vec<usize> = s.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(s
            .chars()
            .all(|c| c == '-' || (c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
    }

    #[test]
    fn test_number_range() {
        let registry = registry();
        let mut rng = RecordRng::seed_from_u64(3);
        for i in 0..500 {
            let n = registry
                .generate(FieldType::Number, i, &FieldOptions::None, &mut rng)
                .unwrap()
                .as_i64()
                .unwrap();
            assert!((0..10_000).contains(&n));
        }
    }

    #[test]
    fn test_decimal_has_two_places() {
        for ty in [FieldType::Decimal, FieldType::Currency] {
            match gen(ty, 0) {
                Value::Float(f) => {
                    assert!(f >= 0.0);
                    assert_eq!(f, (f * 100.0).round() / 100.0);
                }
                other => panic!("expected float, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_dates_fall_inside_window() {
        let registry = registry();
        let window = *registry.time_window();
        let mut rng = RecordRng::seed_from_u64(11);
        for i in 0..200 {
            let ts = registry
                .generate(FieldType::Timestamp, i, &FieldOptions::None, &mut rng)
                .unwrap()
                .as_i64()
                .unwrap();
            assert!(ts >= window.start.timestamp() && ts < window.end.timestamp());
        }

        let date = gen(FieldType::Date, 0);
        let date = date.as_str().unwrap();
        assert_eq!(date.len(), 10);
        assert!(date >= "2020-01-01" && date < "2024-06-01");

        let datetime = gen(FieldType::Datetime, 0);
        assert!(chrono::NaiveDateTime::parse_from_str(
            datetime.as_str().unwrap(),
            "%Y-%m-%d %H:%M:%S"
        )
        .is_ok());
    }

    #[test]
    fn test_empty_window_collapses_to_start() {
        let start = default_window_start();
        let registry = FieldTypeRegistry::with_time_window(TimeWindow { start, end: start });
        let mut rng = RecordRng::seed_from_u64(0);
        let value = registry
            .generate(FieldType::Timestamp, 0, &FieldOptions::None, &mut rng)
            .unwrap();
        assert_eq!(value, Value::Integer(start.timestamp()));
    }

    #[test]
    fn test_set_time_window_moves_the_range() {
        let mut registry = registry();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        registry.set_time_window(TimeWindow::ending_at(end));
        assert_eq!(registry.time_window().end, end);
        assert!(registry.contains(FieldType::Timestamp));

        let mut rng = RecordRng::seed_from_u64(2);
        for i in 0..100 {
            let ts = registry
                .generate(FieldType::Timestamp, i, &FieldOptions::None, &mut rng)
                .unwrap()
                .as_i64()
                .unwrap();
            assert!(ts < end.timestamp());
        }
    }

    #[test]
    fn test_custom_picks_from_values() {
        let registry = registry();
        let options = FieldOptions::custom(["red", "green", "blue"]);
        let mut rng = RecordRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for i in 0..200 {
            let value = registry
                .generate(FieldType::Custom, i, &options, &mut rng)
                .unwrap();
            seen.insert(value.as_str().unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_custom_with_empty_values_fails() {
        let registry = registry();
        let mut rng = RecordRng::seed_from_u64(5);
        let err = registry
            .generate(
                FieldType::Custom,
                0,
                &FieldOptions::custom(Vec::<String>::new()),
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidFieldOptions { .. }));

        let err = registry
            .generate(FieldType::Custom, 0, &FieldOptions::None, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidFieldOptions { .. }));
    }

    #[test]
    fn test_unregistered_type_fails() {
        let registry = FieldTypeRegistry::empty();
        let mut rng = RecordRng::seed_from_u64(5);
        let err = registry
            .generate(FieldType::Email, 0, &FieldOptions::None, &mut rng)
            .unwrap_err();
        assert!(matches!(err, GenError::UnknownFieldType(name) if name == "email"));
    }

    #[test]
    fn test_same_seed_same_value() {
        for ty in [FieldType::FullName, FieldType::Text, FieldType::Email] {
            assert_eq!(gen(ty, 0), gen(ty, 0));
        }
    }
}
