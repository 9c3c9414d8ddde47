//! Error types for texo-db

use thiserror::Error;

/// Result type alias for texo-db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while querying the blog database
#[derive(Error, Debug)]
pub enum Error {
    /// MySQL driver error
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Type conversion error
    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion {
        expected: &'static str,
        actual: String,
    },

    /// Column not found in row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Null value for non-optional field
    #[error("Unexpected null value for column: {0}")]
    UnexpectedNull(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Page number or page size outside the accepted range
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
}

impl Error {
    /// Whether the caller supplied bad input, as opposed to the database failing.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidPagination(_))
    }
}
