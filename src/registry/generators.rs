//! Built-in value generators, one per field type.

use super::pools::*;
use super::{FieldTypeEntry, GenContext, RecordRng};
use crate::error::{GenError, Result};
use crate::schema::{FieldOptions, FieldType, SqlColumnKind, ValueKind};
use crate::value::Value;
use chrono::{DateTime, Utc};
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use rand::Rng;

/// Entries for every built-in field type.
pub(super) fn builtin_entries() -> Vec<FieldTypeEntry> {
    use FieldType as T;
    use SqlColumnKind as Sql;
    use ValueKind as K;

    vec![
        FieldTypeEntry::new(T::AutoIncrement, K::Integer, Sql::Serial, auto_increment),
        FieldTypeEntry::new(T::Uuid, K::String, Sql::VarChar, uuid),
        FieldTypeEntry::new(T::FirstName, K::String, Sql::VarChar, first_name),
        FieldTypeEntry::new(T::LastName, K::String, Sql::VarChar, last_name),
        FieldTypeEntry::new(T::FullName, K::String, Sql::VarChar, full_name),
        FieldTypeEntry::new(T::Email, K::String, Sql::VarChar, email),
        FieldTypeEntry::new(T::Username, K::String, Sql::VarChar, username),
        FieldTypeEntry::new(T::Password, K::String, Sql::VarChar, password),
        FieldTypeEntry::new(T::Phone, K::String, Sql::VarChar, phone),
        FieldTypeEntry::new(T::Address, K::String, Sql::VarChar, address),
        FieldTypeEntry::new(T::City, K::String, Sql::VarChar, city),
        FieldTypeEntry::new(T::State, K::String, Sql::VarChar, state),
        FieldTypeEntry::new(T::Country, K::String, Sql::VarChar, country),
        FieldTypeEntry::new(T::ZipCode, K::String, Sql::VarChar, zip_code),
        FieldTypeEntry::new(T::Company, K::String, Sql::VarChar, company),
        FieldTypeEntry::new(T::JobTitle, K::String, Sql::VarChar, job_title),
        FieldTypeEntry::new(T::Text, K::String, Sql::Text, text),
        FieldTypeEntry::new(T::Paragraph, K::String, Sql::Text, paragraph),
        FieldTypeEntry::new(T::Number, K::Integer, Sql::Int, number),
        FieldTypeEntry::new(T::Decimal, K::Float, Sql::Decimal, decimal),
        FieldTypeEntry::new(T::Currency, K::Float, Sql::Decimal, currency),
        FieldTypeEntry::new(T::Boolean, K::Boolean, Sql::Boolean, boolean),
        FieldTypeEntry::new(T::Date, K::String, Sql::Date, date),
        FieldTypeEntry::new(T::Datetime, K::String, Sql::DateTime, datetime),
        FieldTypeEntry::new(T::Timestamp, K::Integer, Sql::Timestamp, timestamp),
        FieldTypeEntry::new(T::Url, K::String, Sql::VarChar, url),
        FieldTypeEntry::new(T::IpAddress, K::String, Sql::VarChar, ip_address),
        FieldTypeEntry::new(T::Custom, K::String, Sql::VarChar, custom),
    ]
}

fn pick<'a, T>(rng: &mut RecordRng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn auto_increment(ctx: &GenContext<'_>, _: &FieldOptions, _: &mut RecordRng) -> Result<Value> {
    Ok(Value::Integer(ctx.index as i64 + 1))
}

fn uuid(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::String(format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        rng.random::<u32>(),
        rng.random::<u16>(),
        (rng.random::<u16>() & 0x0FFF) | 0x4000,
        (rng.random::<u16>() & 0x3FFF) | 0x8000,
        rng.random::<u64>() & 0xFFFF_FFFF_FFFF
    )))
}

fn first_name(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, FIRST_NAMES)))
}

fn last_name(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, LAST_NAMES)))
}

fn full_name(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    Ok(Value::String(format!("{} {}", first, last)))
}

fn email(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last: String = pick(rng, LAST_NAMES)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    let num: u32 = rng.random_range(1..1000);
    let domain = pick(rng, EMAIL_DOMAINS);
    Ok(Value::String(format!("{}.{}{}@{}", first, last, num, domain)))
}

fn username(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let name: String = Username().fake_with_rng(rng);
    Ok(Value::String(name))
}

fn password(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let len = rng.random_range(10..17);
    let password: String = (0..len)
        .map(|_| *pick(rng, PASSWORD_CHARS) as char)
        .collect();
    Ok(Value::String(password))
}

fn phone(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let area: u32 = rng.random_range(200..1000);
    let prefix: u32 = rng.random_range(200..1000);
    let line: u32 = rng.random_range(0..10000);
    Ok(Value::String(format!("({}) {}-{:04}", area, prefix, line)))
}

fn address(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let number: u32 = rng.random_range(1..10000);
    let street = pick(rng, STREET_NAMES);
    let suffix = pick(rng, STREET_SUFFIXES);
    Ok(Value::String(format!("{} {} {}", number, street, suffix)))
}

fn city(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, CITIES)))
}

fn state(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, STATES)))
}

fn country(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, COUNTRIES)))
}

fn zip_code(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let zip: u32 = rng.random_range(501..100_000);
    Ok(Value::String(format!("{:05}", zip)))
}

fn company(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let prefix = pick(rng, COMPANY_PREFIXES);
    let suffix = pick(rng, COMPANY_SUFFIXES);
    Ok(Value::String(format!("{} {}", prefix, suffix)))
}

fn job_title(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::from(*pick(rng, JOB_TITLES)))
}

fn text(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let sentence: String = Sentence(4..10).fake_with_rng(rng);
    Ok(Value::String(sentence))
}

fn paragraph(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let paragraph: String = Paragraph(3..6).fake_with_rng(rng);
    Ok(Value::String(paragraph))
}

fn number(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::Integer(rng.random_range(0..10_000)))
}

fn decimal(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::Float(round2(rng.random_range(0.0..1000.0))))
}

fn currency(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::Float(round2(rng.random_range(0.0..10_000.0))))
}

fn boolean(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::Boolean(rng.random_bool(0.5)))
}

/// Uniform instant in `[window.start, window.end)`, second precision.
fn random_instant(ctx: &GenContext<'_>, rng: &mut RecordRng) -> DateTime<Utc> {
    let start = ctx.window.start.timestamp();
    let end = ctx.window.end.timestamp();
    if end <= start {
        return ctx.window.start;
    }
    let secs = rng.random_range(start..end);
    DateTime::from_timestamp(secs, 0).unwrap_or(ctx.window.start)
}

fn date(ctx: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let instant = random_instant(ctx, rng);
    Ok(Value::String(instant.format("%Y-%m-%d").to_string()))
}

fn datetime(ctx: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let instant = random_instant(ctx, rng);
    Ok(Value::String(instant.format("%Y-%m-%d %H:%M:%S").to_string()))
}

fn timestamp(ctx: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::Integer(random_instant(ctx, rng).timestamp()))
}

fn url(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    let word = pick(rng, URL_WORDS);
    let tld = pick(rng, TOP_LEVEL_DOMAINS);
    let path = pick(rng, URL_PATHS);
    Ok(Value::String(format!("https://www.{}.{}/{}", word, tld, path)))
}

fn ip_address(_: &GenContext<'_>, _: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    Ok(Value::String(format!(
        "{}.{}.{}.{}",
        rng.random_range(1..255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(1..255u8)
    )))
}

fn custom(ctx: &GenContext<'_>, options: &FieldOptions, rng: &mut RecordRng) -> Result<Value> {
    match options.custom_values() {
        Some(values) if !values.is_empty() => Ok(Value::String(pick(rng, values).clone())),
        _ => Err(GenError::InvalidFieldOptions {
            field: ctx.field.to_string(),
            reason: "custom values list is empty".to_string(),
        }),
    }
}
