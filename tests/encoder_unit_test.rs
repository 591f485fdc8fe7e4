//! Encoder output checked with independent parsers.

use quick_xml::events::Event;
use quick_xml::Reader;
use seedgen::encoder::{encoder_for, CsvEncoder, JsonEncoder, SqlEncoder, XmlEncoder};
use seedgen::{
    Dataset, Dialect, Encoder, FieldSpec, FieldType, FieldTypeRegistry, FormatOptions,
    GenerateConfig, Orchestrator, OutputFormat, RecordGenerator, SchemaDefinition, Value,
};

fn tricky_schema() -> SchemaDefinition {
    SchemaDefinition::new("notes")
        .field(FieldSpec::new("id", FieldType::AutoIncrement))
        .field(FieldSpec::custom(
            "body",
            [
                "plain",
                "comma, separated",
                "say \"hello\"",
                "two\nlines",
                "<b>bold</b> & more",
                "it's",
            ],
        ))
        .field(FieldSpec::new("score", FieldType::Decimal).nullable())
        .field(FieldSpec::new("flag", FieldType::Boolean))
}

fn dataset(schema: &SchemaDefinition, count: usize) -> (FieldTypeRegistry, Dataset) {
    let registry = FieldTypeRegistry::new();
    let data = RecordGenerator::new(&registry, 11)
        .generate(schema, count)
        .unwrap();
    (registry, data)
}

#[test]
fn test_json_round_trip() {
    let schema = tricky_schema();
    let (_, data) = dataset(&schema, 60);
    let text = JsonEncoder::new(true).encode(&schema, &data).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.len(), data.len());
    for (object, record) in parsed.iter().zip(&data) {
        assert_eq!(
            object.keys().map(String::as_str).collect::<Vec<_>>(),
            schema.field_names()
        );
        for (name, value) in record.iter() {
            let json = &object[name];
            match value {
                Value::Null => assert!(json.is_null()),
                Value::String(s) => assert_eq!(json.as_str(), Some(s.as_str())),
                Value::Integer(n) => assert_eq!(json.as_i64(), Some(*n)),
                Value::Float(f) => assert_eq!(json.as_f64(), Some(*f)),
                Value::Boolean(b) => assert_eq!(json.as_bool(), Some(*b)),
            }
        }
    }
}

#[test]
fn test_id_name_scenario() {
    let config: GenerateConfig = serde_json::from_str(
        r#"{
            "tableName": "people",
            "recordCount": 3,
            "format": "json",
            "fields": [
                {"name": "id", "type": "auto_increment", "nullable": false},
                {"name": "name", "type": "text", "nullable": false}
            ]
        }"#,
    )
    .unwrap();
    let result = Orchestrator::new().generate(&config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&result.text).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        let keys: Vec<&String> = row.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(row["id"].as_i64(), Some(i as i64 + 1));
        assert!(!row["name"].as_str().unwrap().is_empty());
    }
}

#[test]
fn test_csv_round_trip() {
    let schema = tricky_schema();
    let (_, data) = dataset(&schema, 80);
    let text = CsvEncoder.encode(&schema, &data).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["id", "body", "score", "flag"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), data.len());
    for (row, record) in rows.iter().zip(&data) {
        for (i, value) in record.values().iter().enumerate() {
            assert_eq!(&row[i], value.to_string());
        }
    }
}

#[test]
fn test_sql_batching_arithmetic() {
    let schema = SchemaDefinition::new("events")
        .field(FieldSpec::new("id", FieldType::AutoIncrement))
        .field(FieldSpec::new("kind", FieldType::JobTitle));
    let (registry, data) = dataset(&schema, 250);

    let sql = SqlEncoder::new(Dialect::MySql, &registry)
        .encode(&schema, &data)
        .unwrap();
    assert_eq!(sql.matches("CREATE TABLE").count(), 1);
    assert_eq!(sql.matches("INSERT INTO events (id, kind) VALUES").count(), 3);
    assert_eq!(sql.matches(";").count(), 4);

    let exact = dataset(&schema, 200).1;
    let sql = SqlEncoder::new(Dialect::PostgreSql, &registry)
        .encode(&schema, &exact)
        .unwrap();
    assert_eq!(sql.matches("INSERT INTO").count(), 2);
}

#[test]
fn test_sql_escapes_quotes() {
    let schema = SchemaDefinition::new("t").field(FieldSpec::custom("name", ["O'Neil"]));
    let (registry, data) = dataset(&schema, 2);
    let sql = SqlEncoder::new(Dialect::Sqlite, &registry)
        .encode(&schema, &data)
        .unwrap();
    assert!(sql.contains("('O''Neil'),\n('O''Neil');"));
    assert!(sql.contains("  name VARCHAR(255) NOT NULL\n"));
}

/// Parse `<table><record><field>..</field></record></table>` into rows.
fn parse_xml(xml: &str) -> (String, Vec<Vec<(String, String)>>) {
    let mut reader = Reader::from_str(xml);
    let mut root = String::new();
    let mut rows = Vec::new();
    let mut depth = 0;
    let mut current: Vec<(String, String)> = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                depth += 1;
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                match depth {
                    1 => root = name,
                    2 => current = Vec::new(),
                    3 => current.push((name, String::new())),
                    _ => panic!("unexpected nesting"),
                }
            }
            Event::Text(t) if depth == 3 => {
                let text = t.unescape().unwrap().into_owned();
                if let Some(last) = current.last_mut() {
                    last.1.push_str(&text);
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    rows.push(std::mem::take(&mut current));
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    (root, rows)
}

#[test]
fn test_xml_escape_round_trip() {
    let schema = tricky_schema();
    let (_, data) = dataset(&schema, 60);
    let xml = XmlEncoder.encode(&schema, &data).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<notes>\n"));

    let (root, rows) = parse_xml(&xml);
    assert_eq!(root, "notes");
    assert_eq!(rows.len(), data.len());
    for (row, record) in rows.iter().zip(&data) {
        let expected: Vec<(String, String)> = record
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(row, &expected);
    }
}

#[test]
fn test_encoders_share_error_rules() {
    let registry = FieldTypeRegistry::new();
    let schema = tricky_schema();
    let empty = Dataset::new(
        schema.fields.iter().map(|f| f.name.clone()).collect(),
        Vec::new(),
    );
    for format in [
        OutputFormat::Sql,
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Xml,
    ] {
        let encoder = encoder_for(format, &FormatOptions::default(), &registry);
        assert!(matches!(
            encoder.encode(&schema, &empty),
            Err(seedgen::GenError::InvalidRecordCount { .. })
        ));
    }
}
