//! In-memory [`Pool`] for tests
//!
//! [`ScriptedPool`] answers each statement with the next scripted reply and
//! records what it was asked, so callers can assert on the SQL and the bound
//! parameters without a database.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::row::Record;
use crate::traits::{ExecuteResult, FromRow, FromValue, Pool, ToValue};
use crate::value::Value;

#[derive(Debug, Clone)]
enum Reply {
    Rows(Vec<Record>),
    Fail(String),
}

/// A statement the pool was asked to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// A [`Pool`] that replays scripted result sets in order.
#[derive(Debug, Default)]
pub struct ScriptedPool {
    replies: Mutex<VecDeque<Reply>>,
    statements: Mutex<Vec<Statement>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScriptedPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result set.
    pub fn with_rows(self, rows: Vec<Record>) -> Self {
        lock(&self.replies).push_back(Reply::Rows(rows));
        self
    }

    /// Queue a single-column, single-row result.
    pub fn with_scalar(self, value: impl ToValue) -> Self {
        self.with_rows(vec![Record::new().with("value", value)])
    }

    /// Queue a failure, surfaced as [`Error::Query`].
    pub fn with_error(self, message: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Reply::Fail(message.into()));
        self
    }

    /// Statements run so far, oldest first.
    pub fn statements(&self) -> Vec<Statement> {
        lock(&self.statements).clone()
    }

    /// Scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.replies).len()
    }

    fn next(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>> {
        lock(&self.statements).push(Statement {
            sql: sql.to_string(),
            params,
        });
        match lock(&self.replies).pop_front() {
            Some(Reply::Rows(rows)) => Ok(rows),
            Some(Reply::Fail(message)) => Err(Error::Query(message)),
            None => Err(Error::Query(format!("no scripted reply for: {}", sql))),
        }
    }
}

#[async_trait]
impl Pool for ScriptedPool {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult> {
        let rows = self.next(sql, params)?;
        Ok(ExecuteResult {
            rows_affected: rows.len() as u64,
            last_insert_id: None,
        })
    }

    async fn fetch_all<T: FromRow + Send>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>> {
        self.next(sql, params)?
            .iter()
            .map(|row| T::from_row(row))
            .collect()
    }

    async fn fetch_optional<T: FromRow + Send>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>> {
        self.next(sql, params)?
            .first()
            .map(|row| T::from_row(row))
            .transpose()
    }

    async fn fetch_scalar<T: FromValue + Send>(&self, sql: &str, params: Vec<Value>) -> Result<T> {
        let rows = self.next(sql, params)?;
        let value = rows
            .first()
            .ok_or_else(|| Error::Query("Expected one row, found none".to_string()))?
            .first()
            .cloned()
            .ok_or_else(|| Error::Query("Expected at least one column".to_string()))?;
        T::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;

    #[tokio::test]
    async fn test_replays_in_order_and_records() {
        let pool = ScriptedPool::new().with_scalar(3i64).with_error("boom");

        let n: i64 = Query::new("SELECT COUNT(*) FROM t WHERE a = ?")
            .bind("x")
            .fetch_scalar(&pool)
            .await
            .unwrap();
        assert_eq!(n, 3);

        let err = Query::new("SELECT 1").execute(&pool).await.unwrap_err();
        assert!(matches!(err, Error::Query(m) if m == "boom"));

        let statements = pool.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].params, vec![Value::String("x".to_string())]);
        assert_eq!(pool.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exhausted_script_is_an_error() {
        let pool = ScriptedPool::new();
        assert!(Query::new("SELECT 1").execute(&pool).await.is_err());
    }
}
