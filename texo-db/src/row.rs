//! Column-ordered row representation

use crate::error::{Error, Result};
use crate::traits::Row;
use crate::value::Value;

/// A fetched row: column names paired with their values, in select order.
///
/// Lookups are linear; blog rows have at most a dozen or so columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style.
    pub fn with(mut self, column: impl Into<String>, value: impl crate::ToValue) -> Self {
        self.push(column, value.to_value());
        self
    }

    /// Append a column.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    /// The value of the first selected column.
    pub fn first(&self) -> Option<&Value> {
        self.columns.first().map(|(_, v)| v)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl Row for Record {
    fn get_value(&self, column: &str) -> Result<Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RowExt;

    #[test]
    fn test_lookup_by_name() {
        let record = Record::new().with("id", 7i64).with("tag", "rust");
        assert_eq!(record.get::<i64>("id").unwrap(), 7);
        assert_eq!(record.get::<String>("tag").unwrap(), "rust");
        assert_eq!(record.first(), Some(&Value::I64(7)));
    }

    #[test]
    fn test_missing_and_null_columns() {
        let record = Record::new().with("content", Value::Null);
        assert!(matches!(
            record.get::<String>("title"),
            Err(Error::ColumnNotFound(c)) if c == "title"
        ));
        assert!(matches!(
            record.get::<String>("content"),
            Err(Error::UnexpectedNull(c)) if c == "content"
        ));
        assert_eq!(record.get_or_default::<String>("content").unwrap(), "");
    }
}
