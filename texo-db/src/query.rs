//! Query builder for texo-db

use std::borrow::Cow;

use crate::error::Result;
use crate::traits::{ExecuteResult, FromRow, FromValue, Pool, ToValue};
use crate::value::Value;

/// SQL text plus its bound parameters, with fluent binding.
///
/// The text is either a `'static` literal (tag queries) or a string built
/// at runtime around a [`Predicate`](crate::Predicate) (post queries).
///
/// # Example
///
/// ```ignore
/// use texo_db::{Query, Pool};
///
/// async fn tag_name(pool: &impl Pool, id: i64) -> texo_db::Result<String> {
///     Query::new("SELECT `tag` FROM `posttag` WHERE `id` = ?")
///         .bind(id)
///         .fetch_scalar(pool)
///         .await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Query<'q> {
    sql: Cow<'q, str>,
    params: Vec<Value>,
}

impl<'q> Query<'q> {
    /// Create a new query with the given SQL.
    pub fn new(sql: impl Into<Cow<'q, str>>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Bind a single value to the query.
    ///
    /// Values are bound in order, replacing `?` placeholders.
    pub fn bind<T: ToValue>(mut self, value: T) -> Self {
        self.params.push(value.to_value());
        self
    }

    /// Bind already-converted values, in order.
    pub fn bind_values<I: IntoIterator<Item = Value>>(mut self, values: I) -> Self {
        self.params.extend(values);
        self
    }

    /// Get the SQL string.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Get the bound parameters.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Execute the statement.
    pub async fn execute<P: Pool>(self, pool: &P) -> Result<ExecuteResult> {
        pool.execute(&self.sql, self.params).await
    }

    /// Fetch all matching rows.
    pub async fn fetch_all<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Vec<T>> {
        pool.fetch_all(&self.sql, self.params).await
    }

    /// Fetch the first row, if any.
    pub async fn fetch_optional<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Option<T>> {
        pool.fetch_optional(&self.sql, self.params).await
    }

    /// Fetch a scalar value (first column of first row).
    pub async fn fetch_scalar<T: FromValue + Send, P: Pool>(self, pool: &P) -> Result<T> {
        pool.fetch_scalar(&self.sql, self.params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_in_order() {
        let query = Query::new("SELECT 1 WHERE a = ? AND b = ?")
            .bind("x")
            .bind(Some(3i32))
            .bind_values(vec![Value::Null]);
        assert_eq!(
            query.params(),
            &[
                Value::String("x".to_string()),
                Value::I64(3),
                Value::Null
            ]
        );
    }

    #[test]
    fn test_owned_sql() {
        let sql = format!("SELECT {} FROM `post`", "`id`");
        let query = Query::new(sql);
        assert_eq!(query.sql(), "SELECT `id` FROM `post`");
    }
}
