//! The closed set of field types a schema can use.

use crate::error::GenError;
use serde::{Deserialize, Serialize};

/// Kind of value a field type produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Dialect-agnostic SQL column kind, rendered per dialect by the SQL encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlColumnKind {
    /// Auto-incrementing primary key
    Serial,
    Int,
    Decimal,
    Boolean,
    Text,
    VarChar,
    Date,
    DateTime,
    Timestamp,
}

macro_rules! field_types {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Field type names accepted in a schema.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum FieldType {
            $($variant,)+
        }

        impl FieldType {
            /// Every field type, in catalog order.
            pub const ALL: &'static [FieldType] = &[$(FieldType::$variant,)+];

            /// Name used in configuration files.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(FieldType::$variant => $name,)+
                }
            }
        }

        impl std::str::FromStr for FieldType {
            type Err = GenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok(FieldType::$variant),)+
                    _ => Err(GenError::UnknownFieldType(s.to_string())),
                }
            }
        }
    };
}

field_types! {
    AutoIncrement => "auto_increment",
    Uuid => "uuid",
    FirstName => "first_name",
    LastName => "last_name",
    FullName => "full_name",
    Email => "email",
    Username => "username",
    Password => "password",
    Phone => "phone",
    Address => "address",
    City => "city",
    State => "state",
    Country => "country",
    ZipCode => "zip_code",
    Company => "company",
    JobTitle => "job_title",
    Text => "text",
    Paragraph => "paragraph",
    Number => "number",
    Decimal => "decimal",
    Currency => "currency",
    Boolean => "boolean",
    Date => "date",
    Datetime => "datetime",
    Timestamp => "timestamp",
    Url => "url",
    IpAddress => "ip_address",
    Custom => "custom",
}

impl FieldType {
    /// Types whose values never become NULL, whatever the field says.
    pub fn ignores_nullable(&self) -> bool {
        matches!(self, FieldType::AutoIncrement)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
