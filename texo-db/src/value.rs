//! Dynamic value type shared by query parameters and row columns

use chrono::{NaiveDate, NaiveDateTime};

/// A database value as it travels between Rust and MySQL.
///
/// Only the shapes the blog schema produces are represented: integers come
/// back from the driver as 64-bit, text columns and `GROUP_CONCAT`
/// aggregates as strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL value
    Null,
    /// Signed integer
    I64(i64),
    /// Unsigned integer (`INT UNSIGNED` ids)
    U64(u64),
    /// String/text value
    String(String),
    /// Binary data that is not valid UTF-8
    Bytes(Vec<u8>),
    /// DATETIME at midnight, as the driver reports it
    Date(NaiveDate),
    /// DateTime value
    DateTime(NaiveDateTime),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
        }
    }
}
