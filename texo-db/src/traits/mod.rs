//! Core traits for texo-db

mod from_row;
mod from_value;
mod pool;
mod to_value;

pub use from_row::{FromRow, Row, RowExt};
pub use from_value::FromValue;
pub use pool::{ExecuteResult, Pool};
pub use to_value::ToValue;
