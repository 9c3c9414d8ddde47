//! FromRow trait for mapping database rows to entities

use crate::error::{Error, Result};
use crate::value::Value;

/// A database row that can be queried by column name.
///
/// Implemented by [`Record`](crate::Record), which both the MySQL pool and
/// the scripted test pool hand to [`FromRow`] implementations.
pub trait Row {
    /// Get a value from the row by column name as a dynamic Value.
    ///
    /// Returns an error if the column doesn't exist.
    fn get_value(&self, column: &str) -> Result<Value>;
}

/// Extension trait for typed access to row values.
pub trait RowExt: Row {
    /// Get a typed value from the row by column name.
    ///
    /// A NULL column read into a non-optional type is reported as
    /// [`Error::UnexpectedNull`] naming the column.
    fn get<T: crate::FromValue>(&self, column: &str) -> Result<T> {
        let value = self.get_value(column)?;
        let was_null = value.is_null();
        T::from_value(value).map_err(|e| {
            if was_null {
                Error::UnexpectedNull(column.to_string())
            } else {
                e
            }
        })
    }

    /// Get a nullable column, substituting the type's default for NULL.
    fn get_or_default<T: crate::FromValue + Default>(&self, column: &str) -> Result<T> {
        Ok(self.get::<Option<T>>(column)?.unwrap_or_default())
    }
}

impl<R: Row> RowExt for R {}

/// Trait for types that can be constructed from a database row.
///
/// # Example
///
/// ```ignore
/// use texo_db::{FromRow, Row, RowExt, Result};
///
/// pub struct Author {
///     pub id: i64,
///     pub name: String,
/// }
///
/// impl FromRow for Author {
///     fn from_row<R: Row>(row: &R) -> Result<Self> {
///         Ok(Self {
///             id: row.get("id")?,
///             name: row.get("author")?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Construct an instance of this type from a database row.
    fn from_row<R: Row>(row: &R) -> Result<Self>;
}
