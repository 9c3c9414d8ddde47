//! MySQL implementation for texo-db

mod pool;
mod row;
mod types;

pub use pool::{MySqlPool, MySqlPoolBuilder};
