//! XML output: root element named after the table, one `<record>` per row.

use super::{check_inputs, Encoder, OutputFormat};
use crate::error::{GenError, Result};
use crate::schema::SchemaDefinition;
use crate::value::{Dataset, Value};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};

const INDENT_SIZE: usize = 2;

pub struct XmlEncoder;

fn write_field<W: Write>(writer: &mut Writer<W>, name: &str, value: &Value) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    // Null writes an empty text event so the closing tag stays on the same line
    let text = value.to_string();
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

impl Encoder for XmlEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xml
    }

    fn encode(&self, schema: &SchemaDefinition, dataset: &Dataset) -> Result<String> {
        check_inputs(schema, dataset)?;

        let root = schema.table_name.as_str();
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', INDENT_SIZE);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new(root)))?;
        for record in dataset {
            writer.write_event(Event::Start(BytesStart::new("record")))?;
            for (name, value) in record.iter() {
                write_field(&mut writer, name, value)?;
            }
            writer.write_event(Event::End(BytesEnd::new("record")))?;
        }
        writer.write_event(Event::End(BytesEnd::new(root)))?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes)
            .map_err(|e| GenError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
