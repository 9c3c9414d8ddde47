//! Pool trait for database connection pools

use crate::error::Result;
use crate::traits::{FromRow, FromValue};
use crate::value::Value;
use async_trait::async_trait;

/// Result of a statement execution
#[derive(Debug, Clone)]
pub struct ExecuteResult {
    /// Number of rows affected by the statement
    pub rows_affected: u64,
    /// Last insert ID (for INSERT statements)
    pub last_insert_id: Option<u64>,
}

/// Trait for database connection pools.
///
/// The read API only ever talks to this trait, which keeps the MySQL pool
/// swappable for the scripted pool used in tests.
#[async_trait]
pub trait Pool: Send + Sync {
    /// Execute a statement and return the number of affected rows.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult>;

    /// Fetch all rows matching the query.
    async fn fetch_all<T: FromRow + Send>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>>;

    /// Fetch the first row, if any.
    async fn fetch_optional<T: FromRow + Send>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>>;

    /// Fetch a scalar value (first column of first row).
    async fn fetch_scalar<T: FromValue + Send>(&self, sql: &str, params: Vec<Value>)
        -> Result<T>;
}
